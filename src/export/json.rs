// src/export/json.rs
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;
use tracing::warn;

use super::ParsedEntries;
use crate::error::{Result, VaultError};
use crate::record::{ImportedEntry, NewRecord, Record};

/// Serialize records as a pretty-printed JSON array (4-space indent).
///
/// Keys appear in `id, website, username, password, notes` order.
pub fn records_to_json(records: &[Record]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    let mut ser = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
    records.serialize(&mut ser)?;
    Ok(out)
}

/// Parse a JSON export back into insertable records.
///
/// The document must be an array; elements that are not objects, or whose
/// fields have the wrong type, are skipped. Missing fields become empty strings.
pub fn entries_from_json(bytes: &[u8]) -> Result<ParsedEntries> {
    let doc: Value = serde_json::from_slice(bytes)
        .map_err(|e| VaultError::CorruptData(format!("invalid JSON: {e}")))?;
    let Value::Array(items) = doc else {
        return Err(VaultError::CorruptData(
            "expected a JSON array of records".into(),
        ));
    };

    let mut parsed = ParsedEntries::default();
    for (index, item) in items.into_iter().enumerate() {
        if !item.is_object() {
            warn!(index, "skipping JSON entry that is not an object");
            parsed.skipped += 1;
            continue;
        }
        match serde_json::from_value::<ImportedEntry>(item) {
            Ok(entry) => parsed.records.push(NewRecord::from(entry)),
            Err(e) => {
                warn!(index, error = %e, "skipping malformed JSON entry");
                parsed.skipped += 1;
            }
        }
    }
    Ok(parsed)
}
