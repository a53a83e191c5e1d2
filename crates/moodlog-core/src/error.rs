//! Error types for Moodlog core operations.
//!
//! Every failure in the core is a storage failure of some flavour. Errors are
//! descriptive at the core level; the CLI layer maps them to short
//! "could not save/load/delete" messages.

use thiserror::Error;

/// Result type alias for Moodlog operations.
pub type Result<T> = std::result::Result<T, JournalError>;

/// Core error type for Moodlog operations.
#[derive(Debug, Error)]
pub enum JournalError {
    /// SQLite open, read, write or delete failure
    #[error("Storage I/O error: {source}")]
    StorageIo {
        #[from]
        source: rusqlite::Error,
    },

    /// Filesystem failure while preparing the database location
    #[error("Storage I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// Storage is unusable for a reason other than I/O
    #[error("Storage error: {0}")]
    Storage(String),
}

impl JournalError {
    /// Whether this error belongs to the storage I/O kind.
    pub fn is_storage_io(&self) -> bool {
        matches!(
            self,
            JournalError::StorageIo { .. } | JournalError::Io { .. } | JournalError::Storage(_)
        )
    }
}
