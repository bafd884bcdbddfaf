//! Stage 6: Chronological sort by first temporal marker.

use carenote_core::models::AnalyzedNote;

/// Stable sort by first marker position; markerless notes go last.
pub fn sort_chronologically(mut notes: Vec<AnalyzedNote>) -> Vec<AnalyzedNote> {
    notes.sort_by_key(|note| match note.first_marker_position() {
        Some(position) => (0, position),
        None => (1, 0),
    });
    notes
}
