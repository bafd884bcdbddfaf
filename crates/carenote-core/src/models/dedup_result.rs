use serde::{Deserialize, Serialize};

/// Output of a deduplication run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DedupResult {
    /// Surviving note contents in output order.
    pub deduplicated: Vec<String>,
    pub metadata: DedupMetadata,
}

/// Counters describing what a run removed.
///
/// `original - final == exact + near + merge + redundant` always holds.
/// Skipped notes are listed separately and are not part of `original`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DedupMetadata {
    /// Notes accepted for processing.
    pub original: usize,
    #[serde(rename = "final")]
    pub final_count: usize,
    pub exact_duplicates_removed: usize,
    pub near_duplicates_removed: usize,
    pub merge_count: usize,
    /// Notes whose every sentence was already covered by earlier notes.
    pub redundant_notes_removed: usize,
    pub sentence_duplicates_removed: usize,
    pub reduction_percent: u32,
    pub skipped: Vec<SkippedNote>,
}

impl DedupMetadata {
    /// Metadata for a batch that needed no processing.
    pub fn passthrough(count: usize, skipped: Vec<SkippedNote>) -> Self {
        Self {
            original: count,
            final_count: count,
            skipped,
            ..Default::default()
        }
    }

    /// Total notes removed by any stage.
    pub fn removed(&self) -> usize {
        self.exact_duplicates_removed
            + self.near_duplicates_removed
            + self.merge_count
            + self.redundant_notes_removed
    }
}

/// `round(100 * (original - final) / original)`, zero for an empty batch.
pub fn reduction_percent(original: usize, final_count: usize) -> u32 {
    if original == 0 {
        return 0;
    }
    let removed = original.saturating_sub(final_count) as f64;
    (100.0 * removed / original as f64).round() as u32
}

/// A note that was not processed, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedNote {
    /// Index in the caller's input.
    pub index: usize,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Empty or whitespace-only text.
    Blank,
}
