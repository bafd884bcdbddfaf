//! NoteAnalyzer: raw note → `AnalyzedNote` (sentences, markers, entities,
//! signature, priority).

use carenote_core::constants::{
    PRIORITY_ENTITY_WEIGHT, PRIORITY_HIGH_VALUE_WEIGHT, PRIORITY_LENGTH_DIVISOR,
    PRIORITY_MARKER_WEIGHT, SIGNATURE_MIN_TOKEN_EXCLUSIVE, SIGNATURE_TOKEN_LIMIT,
};
use carenote_core::models::{AnalyzedNote, EntitySet, Marker};
use carenote_core::traits::{INormalizer, ISentenceSplitter};
use carenote_text::EntityExtractor;

/// Builds structured note profiles from the leaf capabilities it borrows.
#[derive(Clone, Copy)]
pub struct NoteAnalyzer<'a> {
    normalizer: &'a dyn INormalizer,
    splitter: &'a dyn ISentenceSplitter,
    extractor: &'a EntityExtractor,
}

impl<'a> NoteAnalyzer<'a> {
    pub fn new(
        normalizer: &'a dyn INormalizer,
        splitter: &'a dyn ISentenceSplitter,
        extractor: &'a EntityExtractor,
    ) -> Self {
        Self {
            normalizer,
            splitter,
            extractor,
        }
    }

    pub fn normalizer(&self) -> &'a dyn INormalizer {
        self.normalizer
    }

    /// Analyze a raw note.
    pub fn analyze(&self, raw: &str) -> AnalyzedNote {
        let high_value = self.extractor.count_high_value_keywords(raw);
        let entities = self.extractor.extract_key_entities(raw);
        let markers = self.extractor.extract_temporal_markers(raw);
        let priority = compute_priority(raw, &entities, markers.len(), high_value);
        self.profile(raw.to_string(), entities, markers, priority)
    }

    /// Re-analyze reassembled content, carrying `priority` over from the note
    /// it replaces.
    pub fn rebuild(&self, content: String, priority: f64) -> AnalyzedNote {
        let entities = self.extractor.extract_key_entities(&content);
        let markers = self.extractor.extract_temporal_markers(&content);
        self.profile(content, entities, markers, priority)
    }

    fn profile(
        &self,
        content: String,
        entities: EntitySet,
        temporal_markers: Vec<Marker>,
        priority: f64,
    ) -> AnalyzedNote {
        let normalized_content = self.normalizer.normalize(&content);
        let signature = compute_signature(&normalized_content);
        AnalyzedNote {
            sentences: self.splitter.split(&content),
            word_count: content.split_whitespace().count(),
            normalized_content,
            signature,
            temporal_markers,
            entities,
            priority,
            content,
        }
    }
}

/// Sorted tokens longer than four characters, first 50, space-joined.
///
/// Repeated tokens are kept, so the signature reflects emphasis as well as
/// vocabulary.
pub fn compute_signature(normalized: &str) -> String {
    let mut tokens: Vec<&str> = normalized
        .split_whitespace()
        .filter(|t| t.chars().count() > SIGNATURE_MIN_TOKEN_EXCLUSIVE)
        .collect();
    tokens.sort_unstable();
    tokens.truncate(SIGNATURE_TOKEN_LIMIT);
    tokens.join(" ")
}

/// `len/100 + 10*(procedures+complications) + 5*markers + 15*high_value`.
pub fn compute_priority(
    content: &str,
    entities: &EntitySet,
    marker_count: usize,
    high_value_hits: usize,
) -> f64 {
    let length = content.chars().count() as f64 / PRIORITY_LENGTH_DIVISOR;
    let clinical = (entities.procedures.len() + entities.complications.len()) as f64;
    length
        + PRIORITY_ENTITY_WEIGHT * clinical
        + PRIORITY_MARKER_WEIGHT * marker_count as f64
        + PRIORITY_HIGH_VALUE_WEIGHT * high_value_hits as f64
}
