// src/config/mod.rs
//! Configuration system for password-vault
//!
//! A plain `Config` value loaded from TOML (plus env overrides) and handed to
//! the store and to import/export calls. There is no global instance.

pub use app::{load, load_from, Config, ExportSettings, ImportSettings, StorageSettings};
pub use defaults::default_config_path;

mod app;
mod defaults;
