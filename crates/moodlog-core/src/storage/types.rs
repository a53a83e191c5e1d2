//! Core data types for the storage layer.

use serde::{Deserialize, Serialize};

/// A persisted journal entry.
///
/// Entries are never mutated after creation; there is no update operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Storage-assigned identifier (`0` means not yet persisted)
    pub id: i64,

    /// Free-form entry text
    pub text: String,

    /// Mood rating, 1 (worst) to 4 (best); stored without validation
    pub rating: i32,

    /// Creation date in `d/M/yyyy` form; also the sort key
    pub created_date: String,
}

impl JournalEntry {
    pub fn new(text: impl Into<String>, rating: i32, created_date: impl Into<String>) -> Self {
        Self {
            id: 0,
            text: text.into(),
            rating,
            created_date: created_date.into(),
        }
    }

    /// Whether storage has assigned this entry an id.
    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }

    /// The mood this entry's rating denotes, if it is a known one.
    pub fn mood(&self) -> Option<Mood> {
        Mood::from_rating(self.rating)
    }
}

/// Mood categories a rating can denote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Awful,
    Bad,
    Good,
    Great,
}

impl Mood {
    pub const ALL: [Mood; 4] = [Mood::Awful, Mood::Bad, Mood::Good, Mood::Great];

    /// Map a stored rating to a mood; anything outside 1..=4 is unrated.
    pub fn from_rating(rating: i32) -> Option<Self> {
        match rating {
            1 => Some(Mood::Awful),
            2 => Some(Mood::Bad),
            3 => Some(Mood::Good),
            4 => Some(Mood::Great),
            _ => None,
        }
    }

    pub fn rating(self) -> i32 {
        match self {
            Mood::Awful => 1,
            Mood::Bad => 2,
            Mood::Good => 3,
            Mood::Great => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mood::Awful => "awful",
            Mood::Bad => "bad",
            Mood::Good => "good",
            Mood::Great => "great",
        }
    }
}

/// Row order for a full table read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryOrder {
    /// `created_date` descending as text, newest id first on ties
    #[default]
    CreatedDateDesc,

    /// Ascending id, i.e. the order rows were inserted
    Insertion,
}
