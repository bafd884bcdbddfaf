//! Stage 2: Analyze. Independent per note, so computed in parallel.

use carenote_core::models::AnalyzedNote;
use rayon::prelude::*;

use crate::analyzer::NoteAnalyzer;

/// Analyze every note. Output order matches input order.
pub fn analyze_notes(notes: &[&str], analyzer: &NoteAnalyzer<'_>) -> Vec<AnalyzedNote> {
    notes.par_iter().map(|note| analyzer.analyze(note)).collect()
}
