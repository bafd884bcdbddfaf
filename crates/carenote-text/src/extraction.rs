//! Temporal marker and clinical keyword extraction over the `patterns` tables.

use carenote_core::models::{EntitySet, Marker};

use crate::patterns::char_offset;
use crate::patterns::temporal::{all_patterns, TemporalPattern};
use crate::patterns::vocabulary::{default_vocabularies, EntityCategory, Vocabulary, HIGH_VALUE_TERMS};

/// Scans text for temporal markers and fixed-vocabulary clinical keywords.
#[derive(Debug, Clone)]
pub struct EntityExtractor {
    vocabularies: Vec<Vocabulary>,
    high_value_terms: Vec<String>,
}

impl Default for EntityExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityExtractor {
    /// Extractor over the built-in vocabularies and high-value terms.
    pub fn new() -> Self {
        Self {
            vocabularies: default_vocabularies(),
            high_value_terms: HIGH_VALUE_TERMS.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Add a vocabulary. Terms from all vocabularies of a category accumulate.
    pub fn with_vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.vocabularies.push(vocabulary);
        self
    }

    pub fn vocabularies(&self) -> &[Vocabulary] {
        &self.vocabularies
    }

    /// Temporal markers ordered by character position.
    pub fn extract_temporal_markers(&self, text: &str) -> Vec<Marker> {
        extract_temporal_markers(text)
    }

    /// Vocabulary terms present in `text`, case-insensitive substring match.
    pub fn extract_key_entities(&self, text: &str) -> EntitySet {
        let haystack = text.to_lowercase();
        let mut entities = EntitySet::default();
        for vocabulary in &self.vocabularies {
            let bucket = match vocabulary.category {
                EntityCategory::Procedure => &mut entities.procedures,
                EntityCategory::Medication => &mut entities.medications,
                EntityCategory::Complication => &mut entities.complications,
                EntityCategory::ExamFinding => &mut entities.exam_findings,
            };
            bucket.extend(
                vocabulary
                    .terms
                    .iter()
                    .filter(|term| haystack.contains(term.as_str()))
                    .cloned(),
            );
        }
        entities
    }

    /// Number of distinct high-value terms present in `text`.
    pub fn count_high_value_keywords(&self, text: &str) -> usize {
        let haystack = text.to_lowercase();
        self.high_value_terms
            .iter()
            .filter(|term| haystack.contains(term.as_str()))
            .count()
    }
}

/// Run every temporal pattern over `text`.
///
/// Positions are character offsets. Markers at equal positions keep pattern
/// table order.
pub fn extract_temporal_markers(text: &str) -> Vec<Marker> {
    let mut markers: Vec<Marker> = all_patterns()
        .iter()
        .flat_map(|pattern| matches_for(pattern, text))
        .collect();
    markers.sort_by_key(|m| m.position);
    markers
}

fn matches_for(pattern: &TemporalPattern, text: &str) -> Vec<Marker> {
    let Some(regex) = pattern.regex.as_ref() else {
        return Vec::new();
    };
    regex
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let value = caps.get(pattern.value_group)?.as_str();
            let value = if pattern.lowercase_value {
                value.to_lowercase()
            } else {
                value.to_string()
            };
            Some(Marker::new(
                pattern.kind,
                value,
                char_offset(text, whole.start()),
            ))
        })
        .collect()
}
