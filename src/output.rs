//! Output formatting

use crate::models::note::Note;

/// Render a fetched note for stdout: pretty JSON, or `null` when absent.
pub fn format_note(note: Option<&Note>) -> serde_json::Result<String> {
    match note {
        Some(note) => serde_json::to_string_pretty(note),
        None => Ok("null".to_string()),
    }
}
