//! Rendering entries for the terminal.

use comfy_table::presets::NOTHING;
use comfy_table::{Cell, ContentArrangement, Table};

use moodlog_core::{JournalEntry, Mood};

const HEADERS: [&str; 4] = ["ID", "Date", "Mood", "Entry"];

/// Label for a stored rating; anything outside 1..=4 is "unrated".
pub fn mood_label(rating: i32) -> &'static str {
    Mood::from_rating(rating).map_or("unrated", Mood::label)
}

/// Single-line preview of entry text, at most `max_chars` characters.
///
/// Line breaks become spaces. Text that does not fit ends in "..." unless
/// `max_chars` is too small to hold it.
pub fn preview(text: &str, max_chars: usize) -> String {
    let flat: Vec<char> = text
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    if flat.len() <= max_chars {
        return flat.into_iter().collect();
    }
    if max_chars <= 3 {
        return flat[..max_chars].iter().collect();
    }
    let mut out: String = flat[..max_chars - 3].iter().collect();
    out.push_str("...");
    out
}

/// Table cells for one entry: id, date, mood, text.
pub fn entry_row(entry: &JournalEntry, preview_chars: Option<usize>) -> Vec<String> {
    let text = match preview_chars {
        Some(max) => preview(&entry.text, max),
        None => entry.text.clone(),
    };
    vec![
        entry.id.to_string(),
        entry.created_date.clone(),
        mood_label(entry.rating).to_string(),
        text,
    ]
}

/// Borderless table of entries, or a placeholder when there are none.
pub fn render_list(entries: &[JournalEntry], preview_chars: Option<usize>) -> String {
    if entries.is_empty() {
        return "No entries yet.".to_string();
    }

    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(HEADERS.iter().map(|h| Cell::new(*h)).collect::<Vec<_>>());

    for i in 0..HEADERS.len() {
        if let Some(column) = table.column_mut(i) {
            column.set_padding((0, 2));
        }
    }

    for entry in entries {
        table.add_row(entry_row(entry, preview_chars));
    }

    table.to_string()
}

pub fn entries_json(entries: &[JournalEntry]) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}
