//! SQLite exporter

use std::path::Path;

use rusqlite::Connection;

use super::ExportError;
use crate::model::CommitRecord;

/// Write records into `table` at `db_path`.
///
/// The table is replaced, never appended: an existing table of the same
/// name is dropped first, so re-running against an unchanged repository
/// leaves identical contents. All rows go in a single transaction.
pub fn write(records: &[CommitRecord], db_path: &Path, table: &str) -> Result<(), ExportError> {
    let mut conn = Connection::open(db_path)?;
    let table_sql = quote_identifier(table);

    conn.execute_batch(&format!(
        "DROP TABLE IF EXISTS {table_sql};
         CREATE TABLE {table_sql} (
             hash    TEXT,
             author  TEXT,
             date    TEXT,
             message TEXT
         );"
    ))?;

    let tx = conn.transaction()?;
    {
        let mut stmt = tx.prepare(&format!(
            "INSERT INTO {table_sql} (hash, author, date, message) VALUES (?1, ?2, ?3, ?4)"
        ))?;
        for record in records {
            stmt.execute(rusqlite::params![
                record.hash,
                record.author,
                record.date,
                record.message,
            ])?;
        }
    }
    tx.commit()?;
    Ok(())
}

/// Double-quote an identifier, escaping embedded quotes.
fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
