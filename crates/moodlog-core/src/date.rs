//! Creation-date formatting.
//!
//! Entries store their creation date as `d/M/yyyy` text: day and month
//! without zero padding, four-digit year. The stored text is also the sort
//! key, so ordering is textual rather than calendrical.

use chrono::{Datelike, Local, NaiveDate};

/// Format a calendar date the way entries store it.
pub fn format_created_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.day(), date.month(), date.year())
}

/// Today's local date in stored form.
pub fn today() -> String {
    format_created_date(Local::now().date_naive())
}
