use crate::errors::CarenoteResult;
use crate::models::DedupResult;

/// Note deduplication and consolidation.
pub trait IDeduplicator: Send + Sync {
    /// Reduce an ordered batch of notes to its minimal, ordered subset.
    fn deduplicate(&self, notes: &[String]) -> CarenoteResult<DedupResult>;
}
