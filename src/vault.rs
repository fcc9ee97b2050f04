// src/vault.rs
//! The credential store, sole owner of the persisted record set
//!
//! Every mutation goes through [`PasswordVault`]. Each public operation is its
//! own unit of work; `add_record` and `delete_records` run inside a
//! transaction, and `import` can optionally wrap the whole file in one.

use std::collections::BTreeSet;
use std::path::Path;

use rusqlite::Connection;
use tracing::{debug, info, warn};

use crate::aliases::ExportKey16;
use crate::config::{Config, ImportSettings};
use crate::db::vault_db_ops as ops;
use crate::db::{open_vault_db, open_vault_db_in_memory};
use crate::enums::{ExportFormat, ImportMode};
use crate::error::Result;
use crate::export;
use crate::record::{NewRecord, Record, RecordPatch};

/// Outcome of an import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Entries written to the store
    pub imported: usize,
    /// Malformed rows/entries dropped while decoding
    pub skipped: usize,
    /// Entries whose insert failed (best-effort mode only)
    pub failed: usize,
}

pub struct PasswordVault {
    conn: Connection,
    export_key: ExportKey16,
}

impl PasswordVault {
    /// Open the database named by `config.storage.db_path`
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::open(&config.storage.db_path, config)
    }

    /// Open (or create) the database at `path`
    pub fn open(path: &Path, config: &Config) -> Result<Self> {
        Ok(Self {
            conn: open_vault_db(path)?,
            export_key: config.export.export_key()?,
        })
    }

    pub fn open_in_memory(config: &Config) -> Result<Self> {
        Ok(Self {
            conn: open_vault_db_in_memory()?,
            export_key: config.export.export_key()?,
        })
    }

    /// Insert a record; with `override_existing`, first drop every record
    /// sharing its (website, username, password). Returns the new id.
    pub fn add_record(&self, rec: &NewRecord, override_existing: bool) -> Result<i64> {
        let tx = self.conn.unchecked_transaction()?;
        let id = ops::add_record(&tx, rec, override_existing)?;
        tx.commit()?;
        debug!(id, override_existing, "record added");
        Ok(id)
    }

    /// Delete all `ids` atomically.
    ///
    /// Returns `false` without touching anything when `ids` is empty or when
    /// any of them does not exist.
    pub fn delete_records(&self, ids: &[i64]) -> Result<bool> {
        let unique: Vec<i64> = ids.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();
        if unique.is_empty() {
            return Ok(false);
        }

        let tx = self.conn.unchecked_transaction()?;
        let deleted = ops::delete_by_ids(&tx, &unique)?;
        if deleted != unique.len() {
            tx.rollback()?;
            warn!(
                requested = unique.len(),
                found = deleted,
                "batch delete rolled back: unknown id(s) in request"
            );
            return Ok(false);
        }
        tx.commit()?;
        info!(count = deleted, "records deleted");
        Ok(true)
    }

    /// Apply a partial update; returns the number of affected rows.
    ///
    /// 0 means the id does not exist (or the patch was empty).
    pub fn update_record(&self, id: i64, patch: &RecordPatch) -> Result<usize> {
        if patch.is_empty() {
            return Ok(0);
        }
        patch.validate()?;
        let affected = ops::update_fields(&self.conn, id, patch)?;
        if affected == 0 {
            debug!(id, "update matched no record");
        }
        Ok(affected)
    }

    /// Every record, ascending by website
    pub fn get_all(&self) -> Result<Vec<Record>> {
        Ok(ops::select_all(&self.conn)?)
    }

    /// Records whose website contains `keyword`, case-insensitively.
    /// An empty keyword matches everything.
    pub fn search(&self, keyword: &str) -> Result<Vec<Record>> {
        Ok(ops::select_by_website(&self.conn, keyword)?)
    }

    pub fn len(&self) -> Result<usize> {
        Ok(ops::count_records(&self.conn)?)
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Write the full record set to `path`; returns how many records were written
    pub fn export(&self, path: &Path, format: ExportFormat) -> Result<usize> {
        // Read inside one transaction so the file reflects a single snapshot
        let tx = self.conn.unchecked_transaction()?;
        let records = ops::select_all(&tx)?;
        tx.commit()?;

        let bytes = export::encode(&records, format, &self.export_key)?;
        std::fs::write(path, bytes)?;
        info!(count = records.len(), %format, path = %path.display(), "export complete");
        Ok(records.len())
    }

    /// Read `path` and add every decoded entry with the configured policy
    pub fn import(
        &self,
        path: &Path,
        format: ExportFormat,
        settings: &ImportSettings,
    ) -> Result<ImportReport> {
        let bytes = std::fs::read(path)?;
        let report = self.import_bytes(&bytes, format, settings)?;
        info!(
            imported = report.imported,
            skipped = report.skipped,
            failed = report.failed,
            %format,
            path = %path.display(),
            "import complete"
        );
        Ok(report)
    }

    /// Same as [`import`](Self::import) for an in-memory file
    pub fn import_bytes(
        &self,
        bytes: &[u8],
        format: ExportFormat,
        settings: &ImportSettings,
    ) -> Result<ImportReport> {
        let parsed = export::decode(bytes, format, &self.export_key)?;
        let override_existing = settings.policy.overrides();
        let mut report = ImportReport {
            skipped: parsed.skipped,
            ..ImportReport::default()
        };

        match settings.mode {
            ImportMode::BestEffort => {
                for rec in &parsed.records {
                    match self.add_record(rec, override_existing) {
                        Ok(_) => report.imported += 1,
                        Err(e) => {
                            warn!(error = %e, website = %rec.website, "import entry failed");
                            report.failed += 1;
                        }
                    }
                }
            }
            ImportMode::AllOrNothing => {
                let tx = self.conn.unchecked_transaction()?;
                for rec in &parsed.records {
                    ops::add_record(&tx, rec, override_existing)?;
                    report.imported += 1;
                }
                tx.commit()?;
            }
        }
        Ok(report)
    }
}
