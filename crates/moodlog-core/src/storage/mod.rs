//! Storage layer for Moodlog.
//!
//! This module defines the `EntryStore` trait and the journal entry types
//! stored through it.
//!
//! ## Architecture
//!
//! The storage layer owns exactly one table, `entries`, plus a schema
//! version marker. It knows nothing about caching or observers; that is the
//! repository's job.
//!
//! - SQLite file (or in-memory) database via `SqliteStore`
//!
//! Schema upgrades are destructive: a version mismatch drops the table and
//! recreates it empty.

pub mod sqlite;
pub mod traits;
pub mod types;

// Re-export public types
pub use sqlite::{SqliteStore, SCHEMA_VERSION};
pub use traits::EntryStore;
pub use types::{EntryOrder, JournalEntry, Mood};
