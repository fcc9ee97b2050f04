// src/config/app.rs
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use super::defaults::*;
use crate::aliases::ExportKey16;
use crate::consts::{CONFIG_PATH_ENV, DB_PATH_ENV, EXPORT_KEY_LEN, LEGACY_EXPORT_KEY};
use crate::enums::{ExportFormat, ImportMode, ImportPolicy};
use crate::error::{Result, VaultError};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage: StorageSettings,
    pub import: ImportSettings,
    pub export: ExportSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    pub db_path: PathBuf,
}

impl Default for StorageSettings {
    fn default() -> Self {
        default_storage()
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct ImportSettings {
    pub policy: ImportPolicy,
    pub mode: ImportMode,
}

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    pub dir: PathBuf,
    /// 32 hex chars; the legacy key is used when unset
    pub key_hex: Option<String>,
}

impl Default for ExportSettings {
    fn default() -> Self {
        default_export()
    }
}

impl fmt::Debug for ExportSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExportSettings")
            .field("dir", &self.dir)
            .field("key_hex", &self.key_hex.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl ExportSettings {
    /// Key used for `.aes` exports and imports
    pub fn export_key(&self) -> Result<ExportKey16> {
        let Some(hex_key) = self.key_hex.as_deref() else {
            return Ok(ExportKey16::new(*LEGACY_EXPORT_KEY));
        };
        let bytes = hex::decode(hex_key.trim())
            .map_err(|e| VaultError::Config(format!("export.key_hex is not valid hex: {e}")))?;
        let key: [u8; EXPORT_KEY_LEN] = bytes.try_into().map_err(|b: Vec<u8>| {
            VaultError::Config(format!(
                "export.key_hex must decode to {EXPORT_KEY_LEN} bytes, got {}",
                b.len()
            ))
        })?;
        Ok(ExportKey16::new(key))
    }

    /// `<dir>/<stem>.<ext>`
    pub fn target_path(&self, stem: &str, format: ExportFormat) -> PathBuf {
        self.dir.join(format!("{stem}.{}", format.extension()))
    }
}

impl Config {
    /// Apply environment overrides on top of file values
    fn apply_env(mut self) -> Self {
        if let Some(db) = std::env::var_os(DB_PATH_ENV) {
            self.storage.db_path = PathBuf::from(db);
        }
        self
    }
}

/// Load config from an explicit path; falls back to defaults if the file is missing
pub fn load_from(path: &Path) -> Result<Config> {
    let conf = if path.exists() {
        let content = std::fs::read_to_string(path)?;
        let conf: Config = toml::from_str(&content)?;
        debug!(path = %path.display(), "loaded config");
        conf
    } else {
        warn!(path = %path.display(), "config file not found, using built-in defaults");
        Config::default()
    };
    // Surface a bad key at load time rather than at the first export
    conf.export.export_key()?;
    Ok(conf.apply_env())
}

/// Load config from `PASSWORD_VAULT_CONFIG` or the platform config dir
pub fn load() -> Result<Config> {
    let path = std::env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(default_config_path);
    load_from(&path)
}
