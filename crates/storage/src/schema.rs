//! Rank history schema.
//!
//! The table layout is fixed; there are no migrations. `ensure_schema` only
//! ever creates the table when it is missing.

use rusqlite::Connection;

/// Name of the single history table.
pub(crate) const TABLE_NAME: &str = "itunes";

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS itunes (
    id INTEGER,
    word TEXT,
    pos INTEGER NULL,
    date TEXT
)";

pub(crate) fn table_exists(conn: &Connection) -> Result<bool, rusqlite::Error> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
        [TABLE_NAME],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

/// Create the history table if it does not exist yet.
pub(crate) fn ensure_schema(conn: &Connection) -> Result<(), rusqlite::Error> {
    if table_exists(conn)? {
        tracing::debug!(table = TABLE_NAME, "rank table already present");
        return Ok(());
    }
    tracing::info!(table = TABLE_NAME, "creating rank table");
    conn.execute(CREATE_TABLE, [])?;
    Ok(())
}
