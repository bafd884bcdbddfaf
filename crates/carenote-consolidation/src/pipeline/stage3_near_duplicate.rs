//! Stage 3: Near-duplicate collapse.
//!
//! Single left-to-right scan over a growing kept list. A candidate is compared
//! with kept notes in order; the first one meeting the threshold decides, and
//! the higher-priority note of the pair occupies that slot.

use carenote_core::models::AnalyzedNote;
use carenote_core::traits::ISimilarity;
use carenote_text::similarity::is_duplicate;
use tracing::debug;

use super::signature_similarity;

#[derive(Debug)]
pub struct CollapseOutcome {
    pub kept: Vec<AnalyzedNote>,
    pub removed: usize,
}

/// Collapse near-duplicates. Ties keep the earlier note.
pub fn collapse_near_duplicates(
    notes: Vec<AnalyzedNote>,
    similarity: &dyn ISimilarity,
    threshold: f64,
) -> CollapseOutcome {
    let mut kept: Vec<AnalyzedNote> = Vec::with_capacity(notes.len());
    let mut removed = 0;

    for candidate in notes {
        let matched = kept.iter().position(|existing| {
            is_duplicate(signature_similarity(&candidate, existing, similarity), threshold)
        });

        match matched {
            Some(slot) => {
                removed += 1;
                if candidate.priority > kept[slot].priority {
                    debug!(
                        slot,
                        winner = candidate.priority,
                        loser = kept[slot].priority,
                        "stage 3: candidate replaces kept near-duplicate"
                    );
                    kept[slot] = candidate;
                } else {
                    debug!(slot, "stage 3: candidate dropped as near-duplicate");
                }
            }
            None => kept.push(candidate),
        }
    }

    CollapseOutcome { kept, removed }
}
