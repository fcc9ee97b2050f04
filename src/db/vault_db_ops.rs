//! Vault database operations
//!
//! Single-statement building blocks over a `Connection` (or a `Transaction`,
//! which derefs to one). None of these open a transaction themselves: the
//! caller decides the unit of work.

use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};

use crate::record::{NewRecord, Record, RecordPatch};

const SELECT_COLUMNS: &str = "SELECT id, website, username, password, notes FROM passwords";

fn row_to_record(row: &Row<'_>) -> rusqlite::Result<Record> {
    Ok(Record {
        id: row.get(0)?,
        website: row.get(1)?,
        username: row.get(2)?,
        password: row.get(3)?,
        notes: row.get(4)?,
    })
}

/// Insert a row and return its freshly assigned id
pub fn insert_record(conn: &Connection, rec: &NewRecord) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO passwords (website, username, password, notes)
         VALUES (?1, ?2, ?3, ?4)",
        params![rec.website, rec.username, rec.password, rec.notes],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Delete every row sharing the (website, username, password) triple
pub fn delete_matching(conn: &Connection, rec: &NewRecord) -> rusqlite::Result<usize> {
    conn.execute(
        "DELETE FROM passwords WHERE website = ?1 AND username = ?2 AND password = ?3",
        params![rec.website, rec.username, rec.password],
    )
}

/// Insert with the override policy applied: when `override_existing` is set,
/// rows with the same triple are removed first
pub fn add_record(
    conn: &Connection,
    rec: &NewRecord,
    override_existing: bool,
) -> rusqlite::Result<i64> {
    if override_existing {
        let replaced = delete_matching(conn, rec)?;
        if replaced > 0 {
            tracing::debug!(replaced, "override removed duplicate record(s)");
        }
    }
    insert_record(conn, rec)
}

/// Delete rows by id; returns how many rows went away
pub fn delete_by_ids(conn: &Connection, ids: &[i64]) -> rusqlite::Result<usize> {
    if ids.is_empty() {
        return Ok(0);
    }
    let placeholders = vec!["?"; ids.len()].join(",");
    conn.execute(
        &format!("DELETE FROM passwords WHERE id IN ({placeholders})"),
        params_from_iter(ids.iter()),
    )
}

/// Apply a partial update; returns the number of rows touched (0 or 1)
pub fn update_fields(conn: &Connection, id: i64, patch: &RecordPatch) -> rusqlite::Result<usize> {
    if patch.is_empty() {
        return Ok(0);
    }
    // Column names come from `RecordField`, never from caller input
    let set_clause = patch
        .iter()
        .enumerate()
        .map(|(i, (field, _))| format!("{} = ?{}", field.column(), i + 1))
        .collect::<Vec<_>>()
        .join(", ");
    let mut values: Vec<Value> = patch
        .iter()
        .map(|(_, v)| Value::Text(v.to_string()))
        .collect();
    values.push(Value::Integer(id));

    conn.execute(
        &format!(
            "UPDATE passwords SET {set_clause} WHERE id = ?{}",
            values.len()
        ),
        params_from_iter(values.iter()),
    )
}

/// Full table, ascending by website
pub fn select_all(conn: &Connection) -> rusqlite::Result<Vec<Record>> {
    let mut stmt = conn.prepare(&format!("{SELECT_COLUMNS} ORDER BY website ASC, id ASC"))?;
    let records = stmt
        .query_map([], row_to_record)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(records)
}

/// Rows whose website contains `keyword` (ASCII case-insensitive), ascending by website
pub fn select_by_website(conn: &Connection, keyword: &str) -> rusqlite::Result<Vec<Record>> {
    let pattern = format!("%{}%", escape_like(keyword));
    let mut stmt = conn.prepare(&format!(
        r"{SELECT_COLUMNS} WHERE website LIKE ?1 ESCAPE '\' ORDER BY website ASC, id ASC"
    ))?;
    let records = stmt
        .query_map([pattern], row_to_record)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(records)
}

pub fn count_records(conn: &Connection) -> rusqlite::Result<usize> {
    let n: i64 = conn.query_row("SELECT COUNT(*) FROM passwords", [], |r| r.get(0))?;
    Ok(usize::try_from(n).unwrap_or(0))
}

/// Escape LIKE wildcards so the keyword matches literally
fn escape_like(keyword: &str) -> String {
    let mut out = String::with_capacity(keyword.len());
    for c in keyword.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_vault_db_in_memory;

    #[test]
    fn escape_like_quotes_wildcards() {
        assert_eq!(escape_like("goo"), "goo");
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
    }

    #[test]
    fn wildcard_keyword_matches_literally() {
        let conn = open_vault_db_in_memory().unwrap();
        insert_record(&conn, &NewRecord::new("100%.com", "u", "p", "")).unwrap();
        insert_record(&conn, &NewRecord::new("1000.com", "u", "p", "")).unwrap();

        let hits = select_by_website(&conn, "0%").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].website, "100%.com");
    }

    #[test]
    fn update_builds_numbered_placeholders() {
        let conn = open_vault_db_in_memory().unwrap();
        let id = insert_record(&conn, &NewRecord::new("a.com", "u", "p", "")).unwrap();

        let patch = RecordPatch::new().username("u2").notes("n");
        assert_eq!(update_fields(&conn, id, &patch).unwrap(), 1);

        let rec = &select_all(&conn).unwrap()[0];
        assert_eq!(rec.username, "u2");
        assert_eq!(rec.notes.as_deref(), Some("n"));
        assert_eq!(rec.password, "p");
    }
}
