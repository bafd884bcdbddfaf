//! DedupEngine: implements IDeduplicator over owned text capabilities.

use carenote_core::config::DedupConfig;
use carenote_core::constants::MAX_BATCH_NOTES;
use carenote_core::errors::{CarenoteResult, InputError};
use carenote_core::models::DedupResult;
use carenote_core::traits::{IDeduplicator, INormalizer, ISentenceSplitter, ISimilarity};
use carenote_text::{CanonicalNormalizer, DiceSimilarity, EntityExtractor, TerminatorSplitter};
use rayon::prelude::*;
use serde_json::Value;
use tracing::warn;

use crate::analyzer::NoteAnalyzer;
use crate::pipeline;

/// The main deduplication engine.
///
/// Owns its capabilities and a validated configuration. Holds no mutable
/// state, so one engine can serve many batches concurrently.
pub struct DedupEngine {
    config: DedupConfig,
    normalizer: Box<dyn INormalizer>,
    similarity: Box<dyn ISimilarity>,
    splitter: Box<dyn ISentenceSplitter>,
    extractor: EntityExtractor,
}

impl DedupEngine {
    /// Create an engine with the default text capabilities.
    ///
    /// Boilerplate removal is wired into the normalizer according to
    /// `config.remove_boilerplate`.
    pub fn new(config: DedupConfig) -> CarenoteResult<Self> {
        let normalizer = CanonicalNormalizer::new(config.remove_boilerplate);
        Self::with_capabilities(
            config,
            Box::new(normalizer),
            Box::new(DiceSimilarity),
            Box::new(TerminatorSplitter),
        )
    }

    /// Create an engine over caller-supplied capabilities.
    pub fn with_capabilities(
        config: DedupConfig,
        normalizer: Box<dyn INormalizer>,
        similarity: Box<dyn ISimilarity>,
        splitter: Box<dyn ISentenceSplitter>,
    ) -> CarenoteResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            normalizer,
            similarity,
            splitter,
            extractor: EntityExtractor::default(),
        })
    }

    /// Replace the entity extractor (e.g. one with extra vocabularies).
    pub fn with_extractor(mut self, extractor: EntityExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn config(&self) -> &DedupConfig {
        &self.config
    }

    /// Deduplicate an ordered batch of notes.
    pub fn deduplicate<S: AsRef<str>>(&self, notes: &[S]) -> CarenoteResult<DedupResult> {
        if notes.len() > MAX_BATCH_NOTES {
            warn!(
                notes = notes.len(),
                advised = MAX_BATCH_NOTES,
                "batch exceeds advised size; near-duplicate and merge stages are quadratic"
            );
        }
        let analyzer = NoteAnalyzer::new(
            self.normalizer.as_ref(),
            self.splitter.as_ref(),
            &self.extractor,
        );
        Ok(pipeline::run_pipeline(
            notes,
            &analyzer,
            self.similarity.as_ref(),
            &self.config,
        ))
    }

    /// Deduplicate a JSON array payload.
    ///
    /// Every entry must be a string; the first entry that is not fails the
    /// whole call before any processing.
    pub fn deduplicate_values(&self, values: &[Value]) -> CarenoteResult<DedupResult> {
        let notes = values
            .iter()
            .enumerate()
            .map(|(index, value)| {
                value.as_str().ok_or_else(|| InputError::InvalidInput {
                    index,
                    reason: format!("expected a string note, found {}", json_kind(value)),
                })
            })
            .collect::<Result<Vec<&str>, _>>()?;
        self.deduplicate(&notes)
    }

    /// Deduplicate independent batches in parallel. Output order matches input order.
    pub fn deduplicate_batches(&self, batches: &[Vec<String>]) -> Vec<CarenoteResult<DedupResult>> {
        batches
            .par_iter()
            .map(|batch| self.deduplicate(batch))
            .collect()
    }
}

impl IDeduplicator for DedupEngine {
    fn deduplicate(&self, notes: &[String]) -> CarenoteResult<DedupResult> {
        DedupEngine::deduplicate(self, notes)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
