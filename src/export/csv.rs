// src/export/csv.rs
use ::csv::{ReaderBuilder, Terminator, WriterBuilder};
use tracing::warn;

use super::ParsedEntries;
use crate::consts::{CSV_HEADER, CSV_MIN_COLUMNS};
use crate::error::{Result, VaultError};
use crate::record::{NewRecord, Record};

/// Serialize records as CSV: header row, then `id,website,username,password,notes`
pub fn records_to_csv(records: &[Record]) -> Result<Vec<u8>> {
    let mut wtr = WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new());

    wtr.write_record(CSV_HEADER)?;
    for r in records {
        let id = r.id.to_string();
        wtr.write_record([
            id.as_str(),
            r.website.as_str(),
            r.username.as_str(),
            r.password.as_str(),
            r.notes_or_empty(),
        ])?;
    }
    wtr.into_inner()
        .map_err(|e| VaultError::Io(e.into_error()))
}

/// Parse a CSV export. The first row is always treated as the header.
///
/// Rows with fewer than four columns, or that cannot be decoded, are skipped.
/// The id column is ignored; notes come from the fifth column when present.
pub fn entries_from_csv(bytes: &[u8]) -> Result<ParsedEntries> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let mut parsed = ParsedEntries::default();
    for (index, row) in rdr.records().enumerate() {
        let row = match row {
            Ok(row) => row,
            Err(e) => {
                warn!(index, error = %e, "skipping unreadable CSV row");
                parsed.skipped += 1;
                continue;
            }
        };
        if row.len() < CSV_MIN_COLUMNS {
            warn!(index, columns = row.len(), "skipping short CSV row");
            parsed.skipped += 1;
            continue;
        }
        parsed.records.push(NewRecord::new(
            &row[1],
            &row[2],
            &row[3],
            row.get(4).unwrap_or(""),
        ));
    }
    Ok(parsed)
}
