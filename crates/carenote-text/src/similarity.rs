//! Bigram similarity, duplicate threshold checks, and the complementary-merge band.

use carenote_core::constants::{MERGE_BAND_LOWER, MERGE_BAND_UPPER};
use carenote_core::traits::ISimilarity;

/// Sørensen–Dice coefficient over character bigrams, whitespace ignored.
///
/// Equal inputs (after whitespace removal) score 1.0, including two empty
/// strings. Inputs shorter than two characters otherwise score 0.0.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiceSimilarity;

impl DiceSimilarity {
    pub fn new() -> Self {
        Self
    }
}

impl ISimilarity for DiceSimilarity {
    fn score(&self, a: &str, b: &str) -> f64 {
        strsim::sorensen_dice(a, b).clamp(0.0, 1.0)
    }
}

/// Check if a similarity meets the duplicate threshold (inclusive).
pub fn is_duplicate(similarity: f64, threshold: f64) -> bool {
    similarity >= threshold
}

/// Check if a similarity falls in the half-open complementary band `[0.3, 0.6)`.
pub fn in_merge_band(similarity: f64) -> bool {
    (MERGE_BAND_LOWER..MERGE_BAND_UPPER).contains(&similarity)
}
