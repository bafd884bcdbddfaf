//! Surface deduplication totals through observability.

use carenote_core::models::{reduction_percent, DedupMetadata};
use serde::Serialize;

/// Running totals over every recorded deduplication run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DedupDashboard {
    /// Total recorded runs.
    pub total_runs: usize,
    /// Notes accepted for processing, summed over runs.
    pub total_notes_in: usize,
    /// Notes returned, summed over runs.
    pub total_notes_out: usize,
    pub total_exact_removed: usize,
    pub total_near_removed: usize,
    pub total_merged: usize,
    pub total_redundant_removed: usize,
    pub total_sentences_removed: usize,
    pub total_skipped: usize,
    /// Metadata of the most recent run.
    pub latest: Option<DedupMetadata>,
}

impl DedupDashboard {
    /// Create a new empty dashboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a deduplication run.
    pub fn record_run(&mut self, metadata: &DedupMetadata) {
        self.total_runs += 1;
        self.total_notes_in += metadata.original;
        self.total_notes_out += metadata.final_count;
        self.total_exact_removed += metadata.exact_duplicates_removed;
        self.total_near_removed += metadata.near_duplicates_removed;
        self.total_merged += metadata.merge_count;
        self.total_redundant_removed += metadata.redundant_notes_removed;
        self.total_sentences_removed += metadata.sentence_duplicates_removed;
        self.total_skipped += metadata.skipped.len();
        self.latest = Some(metadata.clone());
    }

    /// Reduction over all recorded runs, as a rounded percentage.
    pub fn overall_reduction_percent(&self) -> u32 {
        reduction_percent(self.total_notes_in, self.total_notes_out)
    }
}
