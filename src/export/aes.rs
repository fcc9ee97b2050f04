// src/export/aes.rs
//! Encrypted export: the JSON export bytes sealed with AES-128-CBC

use super::json::{entries_from_json, records_to_json};
use super::ParsedEntries;
use crate::aliases::ExportKey16;
use crate::crypto::{decrypt_to_vec, encrypt_to_vec};
use crate::error::{Result, VaultError};
use crate::record::Record;

pub fn records_to_aes(records: &[Record], key: &ExportKey16) -> Result<Vec<u8>> {
    let json = records_to_json(records)?;
    Ok(encrypt_to_vec(&json, key))
}

pub fn entries_from_aes(blob: &[u8], key: &ExportKey16) -> Result<ParsedEntries> {
    let plaintext = decrypt_to_vec(blob, key)?;
    let text = std::str::from_utf8(&plaintext)
        .map_err(|e| VaultError::CorruptData(format!("decrypted payload is not UTF-8: {e}")))?;
    entries_from_json(text.as_bytes())
}
