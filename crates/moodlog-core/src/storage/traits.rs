//! Storage trait definition.
//!
//! The `EntryStore` trait is the raw, row-level interface the repository
//! writes through. Implementations hold no in-memory view of the rows.

use super::types::{EntryOrder, JournalEntry};
use crate::error::Result;

/// Row-level storage for journal entries.
///
/// All implementations must ensure:
/// - Ids are unique and never reused, even after deletion
/// - A failed insert leaves no row behind
/// - Reads never modify storage
pub trait EntryStore {
    /// Ensure the entry table exists at `version`.
    ///
    /// If the recorded schema version differs from `version`, the existing
    /// table is dropped and recreated empty. All rows are lost.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::StorageIo` if the schema cannot be read or
    /// written.
    fn initialize(&mut self, version: u32) -> Result<()>;

    /// Append a new row.
    ///
    /// `rating` is stored as given; no range check is made.
    ///
    /// # Returns
    ///
    /// Returns the id assigned to the new row.
    fn insert(&mut self, text: &str, rating: i32, created_date: &str) -> Result<i64>;

    /// Delete the row with this id.
    ///
    /// An id with no matching row is not an error.
    ///
    /// # Returns
    ///
    /// Returns `true` if a row was removed.
    fn delete_by_id(&mut self, id: i64) -> Result<bool>;

    /// Read every row in the given order.
    fn read_all(&self, order: EntryOrder) -> Result<Vec<JournalEntry>>;
}
