use serde::{Deserialize, Serialize};

use super::{EntitySet, Marker};

/// Structured profile of a single note.
///
/// Built once by the analyzer. Pipeline transforms (collapse, reassembly,
/// merge) produce new values instead of editing an existing one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzedNote {
    pub content: String,
    pub normalized_content: String,
    /// Sentences in source order, original casing kept.
    pub sentences: Vec<String>,
    pub word_count: usize,
    /// Ordered by position.
    pub temporal_markers: Vec<Marker>,
    pub entities: EntitySet,
    /// Sorted significant tokens, see `SIGNATURE_TOKEN_LIMIT`.
    pub signature: String,
    /// Tie-break weight. Not a probability.
    pub priority: f64,
}

impl AnalyzedNote {
    /// Position of the earliest temporal marker, if any.
    pub fn first_marker_position(&self) -> Option<usize> {
        self.temporal_markers.first().map(|m| m.position)
    }

    /// Post-operative day values carried by this note.
    pub fn pod_values(&self) -> impl Iterator<Item = &str> {
        self.temporal_markers
            .iter()
            .filter(|m| m.is_pod())
            .map(|m| m.value.as_str())
    }

    /// Absolute date strings carried by this note.
    pub fn date_values(&self) -> impl Iterator<Item = &str> {
        self.temporal_markers
            .iter()
            .filter(|m| m.is_date())
            .map(|m| m.value.as_str())
    }
}
