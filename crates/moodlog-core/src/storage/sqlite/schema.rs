//! Table definition and the destructive version check.

use rusqlite::{Connection, OptionalExtension};

const CREATE_ENTRIES: &str = r#"
    CREATE TABLE IF NOT EXISTS entries (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        text TEXT NOT NULL,
        rating INTEGER NOT NULL,
        created_date TEXT NOT NULL
    );
"#;

/// Schema version recorded in the database header.
pub fn recorded_version(conn: &Connection) -> rusqlite::Result<u32> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
}

pub fn entries_table_exists(conn: &Connection) -> rusqlite::Result<bool> {
    let name: Option<String> = conn
        .query_row(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'entries'",
            [],
            |row| row.get(0),
        )
        .optional()?;
    Ok(name.is_some())
}

/// Create the table if missing, leaving existing rows alone.
pub fn ensure(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(CREATE_ENTRIES)
}

/// Drop the table with all its rows, recreate it empty and stamp `version`.
pub fn recreate(conn: &Connection, version: u32) -> rusqlite::Result<()> {
    conn.execute_batch("DROP TABLE IF EXISTS entries;")?;
    conn.execute_batch(CREATE_ENTRIES)?;
    conn.pragma_update(None, "user_version", version)
}
