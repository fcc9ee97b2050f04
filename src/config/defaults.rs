// src/config/defaults.rs
use std::path::PathBuf;

use crate::config::app::{ExportSettings, StorageSettings};
use crate::consts::{APP_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_DB_FILE};

pub fn default_db_path() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join(APP_DIR_NAME))
        .unwrap_or_default()
        .join(DEFAULT_DB_FILE)
}

pub fn default_export_dir() -> PathBuf {
    dirs::document_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join(APP_DIR_NAME))
        .unwrap_or_default()
        .join(CONFIG_FILE_NAME)
}

pub fn default_storage() -> StorageSettings {
    StorageSettings {
        db_path: default_db_path(),
    }
}

pub fn default_export() -> ExportSettings {
    ExportSettings {
        dir: default_export_dir(),
        key_hex: None,
    }
}
