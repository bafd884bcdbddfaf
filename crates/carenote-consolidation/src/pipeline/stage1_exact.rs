//! Stage 1: Exact dedup. First occurrence of each normalized text wins.

use std::collections::HashSet;

use carenote_core::traits::INormalizer;
use tracing::debug;

/// Notes surviving exact dedup, in input order.
#[derive(Debug)]
pub struct ExactOutcome<'a> {
    pub kept: Vec<&'a str>,
    pub removed: usize,
}

/// Drop every note whose normalized text was already seen.
pub fn remove_exact_duplicates<'a>(
    notes: &[&'a str],
    normalizer: &dyn INormalizer,
) -> ExactOutcome<'a> {
    let mut seen = HashSet::with_capacity(notes.len());
    let mut kept = Vec::with_capacity(notes.len());
    let mut removed = 0;

    for (index, note) in notes.iter().enumerate() {
        if seen.insert(normalizer.normalize(note)) {
            kept.push(*note);
        } else {
            debug!(index, "stage 1: exact duplicate dropped");
            removed += 1;
        }
    }

    ExactOutcome { kept, removed }
}
