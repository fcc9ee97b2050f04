// src/consts.rs
//! Shared constants: storage names, cipher parameters and file layouts

/// Default database file name inside the data directory
pub const DEFAULT_DB_FILE: &str = "passwords.db";

/// Application directory name under the platform config/data dirs
pub const APP_DIR_NAME: &str = "password-vault";

/// Config file name inside the application config dir
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable pointing at an explicit config file
pub const CONFIG_PATH_ENV: &str = "PASSWORD_VAULT_CONFIG";

/// Environment variable overriding the configured database path
pub const DB_PATH_ENV: &str = "PASSWORD_VAULT_DB";

/// AES block size; also the length of the IV prefix in `.aes` exports
pub const AES_BLOCK_SIZE: usize = 16;

/// AES-128 key length in bytes
pub const EXPORT_KEY_LEN: usize = 16;

/// Key every pre-existing `.aes` export was written with.
// Kept as the default so old exports stay importable; override via `export.key_hex`.
pub const LEGACY_EXPORT_KEY: &[u8; EXPORT_KEY_LEN] = b"Sixteen byte key";

/// Header row of CSV exports
pub const CSV_HEADER: [&str; 5] = ["ID", "Website", "Username", "Password", "Notes"];

/// Minimum number of columns a CSV row needs to be importable (id + the dedup triple)
pub const CSV_MIN_COLUMNS: usize = 4;

/// Prefix of generated export file names
pub const EXPORT_FILE_PREFIX: &str = "passwords";
