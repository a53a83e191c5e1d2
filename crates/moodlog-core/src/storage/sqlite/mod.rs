//! SQLite storage backend.
//!
//! Entries live in a single `entries` table. The schema version is kept in
//! SQLite's `user_version` header field; opening a database stamped with a
//! different version wipes the table.

mod schema;

use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::{params, Connection, Row};
use tracing::{debug, info};

use crate::error::Result;
use crate::storage::traits::EntryStore;
use crate::storage::types::{EntryOrder, JournalEntry};

/// Schema version written by this build.
pub const SCHEMA_VERSION: u32 = 1;

/// SQLite-backed entry storage.
pub struct SqliteStore {
    path: Option<PathBuf>,
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the database file at `path` and initialize it at
    /// `version`.
    ///
    /// Missing parent directories are created.
    pub fn open(path: &Path, version: u32) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        let mut store = Self {
            path: Some(path.to_path_buf()),
            conn,
        };
        store.initialize(version)?;
        debug!(path = %path.display(), version, "opened entry store");
        Ok(store)
    }

    /// Open a private in-memory database initialized at `version`.
    pub fn open_in_memory(version: u32) -> Result<Self> {
        let mut store = Self {
            path: None,
            conn: Connection::open_in_memory()?,
        };
        store.initialize(version)?;
        Ok(store)
    }

    /// Database file path, or `None` for in-memory stores.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Schema version currently recorded in the database.
    pub fn schema_version(&self) -> Result<u32> {
        Ok(schema::recorded_version(&self.conn)?)
    }

    /// Number of stored entries.
    pub fn count(&self) -> Result<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM entries", [], |row| row.get(0))?;
        Ok(count as u64)
    }
}

fn entry_from_row(row: &Row<'_>) -> rusqlite::Result<JournalEntry> {
    Ok(JournalEntry {
        id: row.get(0)?,
        text: row.get(1)?,
        rating: row.get(2)?,
        created_date: row.get(3)?,
    })
}

impl EntryStore for SqliteStore {
    fn initialize(&mut self, version: u32) -> Result<()> {
        let tx = self.conn.transaction()?;

        let recorded = schema::recorded_version(&tx)?;
        if recorded == version {
            schema::ensure(&tx)?;
        } else {
            if schema::entries_table_exists(&tx)? {
                info!(
                    from = recorded,
                    to = version,
                    "schema version changed; dropping all journal entries"
                );
            }
            schema::recreate(&tx, version)?;
        }

        tx.commit()?;
        Ok(())
    }

    fn insert(&mut self, text: &str, rating: i32, created_date: &str) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO entries (text, rating, created_date) VALUES (?1, ?2, ?3)",
            params![text, rating, created_date],
        )?;
        let id = self.conn.last_insert_rowid();
        debug!(id, rating, created_date, "inserted entry");
        Ok(id)
    }

    fn delete_by_id(&mut self, id: i64) -> Result<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM entries WHERE id = ?1", params![id])?;
        debug!(id, removed, "deleted entry");
        Ok(removed > 0)
    }

    fn read_all(&self, order: EntryOrder) -> Result<Vec<JournalEntry>> {
        let query = match order {
            EntryOrder::CreatedDateDesc => {
                "SELECT id, text, rating, created_date FROM entries ORDER BY created_date DESC, id DESC"
            }
            EntryOrder::Insertion => {
                "SELECT id, text, rating, created_date FROM entries ORDER BY id ASC"
            }
        };

        let mut stmt = self.conn.prepare(query)?;
        let rows = stmt.query_map([], entry_from_row)?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row?);
        }
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::JournalError;

    fn store() -> SqliteStore {
        SqliteStore::open_in_memory(SCHEMA_VERSION).unwrap()
    }

    #[test]
    fn test_insert_assigns_increasing_ids() {
        let mut store = store();
        let a = store.insert("first", 1, "1/1/2024").unwrap();
        let b = store.insert("second", 2, "2/1/2024").unwrap();
        assert!(a > 0);
        assert!(b > a);
        assert_eq!(store.count().unwrap(), 2);
    }

    #[test]
    fn test_insert_accepts_any_rating() {
        let mut store = store();
        store.insert("zero", 0, "1/1/2024").unwrap();
        store.insert("huge", 99, "1/1/2024").unwrap();
        store.insert("negative", -3, "1/1/2024").unwrap();

        let ratings: Vec<i32> = store
            .read_all(EntryOrder::Insertion)
            .unwrap()
            .into_iter()
            .map(|e| e.rating)
            .collect();
        assert_eq!(ratings, vec![0, 99, -3]);
    }

    #[test]
    fn test_ids_not_reused_after_deleting_newest() {
        let mut store = store();
        store.insert("a", 1, "1/1/2024").unwrap();
        let b = store.insert("b", 1, "1/1/2024").unwrap();
        assert!(store.delete_by_id(b).unwrap());

        let c = store.insert("c", 1, "1/1/2024").unwrap();
        assert!(c > b);
    }

    #[test]
    fn test_delete_missing_id_is_noop() {
        let mut store = store();
        store.insert("a", 1, "1/1/2024").unwrap();
        assert!(!store.delete_by_id(9999).unwrap());
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_read_all_orders_by_date_text_descending() {
        let mut store = store();
        store.insert("jan 9", 2, "9/1/2024").unwrap();
        store.insert("jan 10", 3, "10/1/2024").unwrap();
        store.insert("jan 2", 4, "2/1/2024").unwrap();

        let dates: Vec<String> = store
            .read_all(EntryOrder::CreatedDateDesc)
            .unwrap()
            .into_iter()
            .map(|e| e.created_date)
            .collect();
        // Textual order, not calendar order.
        assert_eq!(dates, vec!["9/1/2024", "2/1/2024", "10/1/2024"]);
    }

    #[test]
    fn test_read_all_breaks_date_ties_by_newest_id() {
        let mut store = store();
        let a = store.insert("morning", 3, "5/3/2024").unwrap();
        let b = store.insert("evening", 2, "5/3/2024").unwrap();

        let ids: Vec<i64> = store
            .read_all(EntryOrder::CreatedDateDesc)
            .unwrap()
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec![b, a]);
    }

    #[test]
    fn test_initialize_same_version_keeps_rows() {
        let mut store = store();
        store.insert("keep me", 4, "1/1/2024").unwrap();
        store.initialize(SCHEMA_VERSION).unwrap();
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_initialize_new_version_drops_rows() {
        let mut store = store();
        store.insert("gone", 4, "1/1/2024").unwrap();

        store.initialize(SCHEMA_VERSION + 1).unwrap();

        assert_eq!(store.count().unwrap(), 0);
        assert_eq!(store.schema_version().unwrap(), SCHEMA_VERSION + 1);
    }

    #[test]
    fn test_initialize_older_version_also_drops_rows() {
        let mut store = SqliteStore::open_in_memory(5).unwrap();
        store.insert("gone", 4, "1/1/2024").unwrap();

        store.initialize(2).unwrap();

        assert_eq!(store.count().unwrap(), 0);
        assert_eq!(store.schema_version().unwrap(), 2);
    }

    #[test]
    fn test_insert_fails_when_table_missing() {
        let mut store = store();
        store.conn.execute_batch("DROP TABLE entries;").unwrap();

        let err = store.insert("nowhere", 1, "1/1/2024").unwrap_err();
        assert!(matches!(err, JournalError::StorageIo { .. }));
    }

    #[test]
    fn test_rejected_insert_leaves_no_row() {
        let mut store = store();
        store.insert("before", 2, "1/1/2024").unwrap();
        store
            .conn
            .execute_batch(
                r#"
                CREATE TRIGGER reject_marked BEFORE INSERT ON entries
                WHEN NEW.text = 'reject me'
                BEGIN
                    SELECT RAISE(ABORT, 'rejected');
                END;
                "#,
            )
            .unwrap();

        let err = store.insert("reject me", 3, "2/1/2024").unwrap_err();
        assert!(matches!(err, JournalError::StorageIo { .. }));
        assert_eq!(store.count().unwrap(), 1);

        let texts: Vec<String> = store
            .read_all(EntryOrder::Insertion)
            .unwrap()
            .into_iter()
            .map(|e| e.text)
            .collect();
        assert_eq!(texts, vec!["before"]);

        // The store stays usable after the failed statement.
        store.insert("after", 4, "3/1/2024").unwrap();
        assert_eq!(store.count().unwrap(), 2);
    }

    #[test]
    fn test_version_bump_restarts_id_sequence() {
        let mut store = store();
        store.insert("a", 1, "1/1/2024").unwrap();
        store.insert("b", 1, "1/1/2024").unwrap();

        store.initialize(SCHEMA_VERSION + 1).unwrap();

        // Dropping the table also drops its AUTOINCREMENT counter.
        assert_eq!(store.insert("c", 1, "1/1/2024").unwrap(), 1);
    }

    #[test]
    fn test_in_memory_store_has_no_path() {
        assert!(store().path().is_none());
    }
}
