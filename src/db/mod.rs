// src/db/mod.rs
//! SQLite persistence for password records
pub mod vault_db_conn;
pub mod vault_db_ops;

pub use vault_db_conn::{open_vault_db, open_vault_db_in_memory};
