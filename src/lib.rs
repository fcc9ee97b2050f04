// src/lib.rs
//! password-vault: a local credential store
//!
//! Features:
//! - SQLite-backed records with override-on-insert deduplication
//! - Case-insensitive website search, partial updates, atomic batch delete
//! - CSV / JSON export and import
//! - AES-128-CBC encrypted export, compatible with existing `.aes` files

pub mod aliases;
pub mod config;
pub mod consts;
pub mod crypto;
pub mod db;
pub mod enums;
pub mod error;
pub mod export;
pub mod record;
pub mod vault;

// Re-export everything users need at the crate root
pub use aliases::ExportKey16;
pub use config::{load as load_config, Config};
pub use enums::{ExportFormat, ImportMode, ImportPolicy};
pub use error::{Result, VaultError};
pub use record::{NewRecord, Record, RecordField, RecordPatch};
pub use vault::{ImportReport, PasswordVault};
