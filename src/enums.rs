// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for the enums that represent user-visible choices:
//! export formats, the import override policy and the import mode.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VaultError;

/// File formats records can be exported to and imported from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Json,
    Aes,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Csv, ExportFormat::Json, ExportFormat::Aes];

    /// File extension without the leading dot
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Aes => "aes",
        }
    }

    /// Infer the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self, VaultError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| VaultError::UnsupportedFormat(path.display().to_string()))?;
        ext.parse()
    }
}

impl FromStr for ExportFormat {
    type Err = VaultError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            "aes" => Ok(ExportFormat::Aes),
            _ => Err(VaultError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// What happens when an added record repeats an existing (website, username, password)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ImportPolicy {
    /// Replace every existing record with the same triple
    #[default]
    Override,
    /// Keep existing records; the new one coexists with them
    Skip,
}

impl ImportPolicy {
    /// The boolean override flag passed down to the store
    pub fn overrides(self) -> bool {
        matches!(self, ImportPolicy::Override)
    }
}

impl FromStr for ImportPolicy {
    type Err = VaultError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "override" => Ok(ImportPolicy::Override),
            "skip" => Ok(ImportPolicy::Skip),
            other => Err(VaultError::Config(format!(
                "unknown import policy `{other}` (expected Override or Skip)"
            ))),
        }
    }
}

/// Transaction scope of an import
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ImportMode {
    /// Every entry commits on its own; failing entries are counted and skipped
    #[default]
    BestEffort,
    /// The whole file lands in one transaction or not at all
    AllOrNothing,
}
