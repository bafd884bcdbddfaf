//! Capability interfaces consumed and exposed by the pipeline.

pub mod deduplicator;
pub mod normalizer;
pub mod sentence_splitter;
pub mod similarity;

pub use deduplicator::IDeduplicator;
pub use normalizer::INormalizer;
pub use sentence_splitter::ISentenceSplitter;
pub use similarity::ISimilarity;
