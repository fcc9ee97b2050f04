// src/export/mod.rs
//! Export/import codecs for password-vault
//!
//! CSV and JSON are plaintext; AES is the JSON document encrypted with the
//! configured export key. Plaintext exports contain every password in the
//! clear; treat the files accordingly.

pub mod aes;
pub mod csv;
pub mod json;

pub use self::aes::{entries_from_aes, records_to_aes};
pub use self::csv::{entries_from_csv, records_to_csv};
pub use self::json::{entries_from_json, records_to_json};

use chrono::{DateTime, TimeZone};

use crate::aliases::ExportKey16;
use crate::consts::EXPORT_FILE_PREFIX;
use crate::enums::ExportFormat;
use crate::error::Result;
use crate::record::{NewRecord, Record};

/// Records decoded from an import file plus the number of rows that were dropped
#[derive(Debug, Default)]
pub struct ParsedEntries {
    pub records: Vec<NewRecord>,
    pub skipped: usize,
}

/// Serialize `records` in `format`
pub fn encode(records: &[Record], format: ExportFormat, key: &ExportKey16) -> Result<Vec<u8>> {
    match format {
        ExportFormat::Csv => records_to_csv(records),
        ExportFormat::Json => records_to_json(records),
        ExportFormat::Aes => records_to_aes(records, key),
    }
}

/// Decode an import file in `format`
pub fn decode(bytes: &[u8], format: ExportFormat, key: &ExportKey16) -> Result<ParsedEntries> {
    match format {
        ExportFormat::Csv => entries_from_csv(bytes),
        ExportFormat::Json => entries_from_json(bytes),
        ExportFormat::Aes => entries_from_aes(bytes, key),
    }
}

/// `passwords-YYYYmmdd-HHMMSS`, used when the caller gives no file name
pub fn default_file_name<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("{EXPORT_FILE_PREFIX}-{}", now.format("%Y%m%d-%H%M%S"))
}
