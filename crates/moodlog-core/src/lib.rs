//! # Moodlog Core
//!
//! Core library for Moodlog - a small personal journal where every entry
//! carries a mood rating.
//!
//! This crate provides the persistence and retrieval layer, independent of
//! any presentation front end.
//!
//! ## Architecture
//!
//! - **storage**: Schema management and raw row access (`EntryStore`, `SqliteStore`)
//! - **repository**: The observable, always-reconciled list of entries
//! - **date**: Creation-date formatting
//!
//! Every mutation made through the repository is followed by a full re-read
//! of storage, so the published list always equals what is on disk.

pub mod date;
pub mod error;
pub mod repository;
pub mod storage;

pub use error::{JournalError, Result};
pub use repository::{EntryRepository, SubscriptionId};
pub use storage::{EntryOrder, EntryStore, JournalEntry, Mood, SqliteStore, SCHEMA_VERSION};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
