// src/db/vault_db_conn.rs
use rusqlite::{Connection, Result};
use std::{fs, path::Path};

const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS passwords (
        id       INTEGER PRIMARY KEY AUTOINCREMENT,
        website  TEXT NOT NULL,
        username TEXT NOT NULL,
        password TEXT NOT NULL,
        notes    TEXT
    );

    CREATE INDEX IF NOT EXISTS idx_passwords_website ON passwords(website);
"#;

/// Open (or create) the password database at `db_path`
pub fn open_vault_db(db_path: &Path) -> Result<Connection> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            let _ = fs::create_dir_all(parent);
        }
    }

    let conn = Connection::open(db_path)?;
    init_schema(&conn)?;
    tracing::debug!(path = %db_path.display(), "opened vault database");
    Ok(conn)
}

/// In-memory database with the same schema
pub fn open_vault_db_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    init_schema(&conn)?;
    Ok(conn)
}

fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)
}
