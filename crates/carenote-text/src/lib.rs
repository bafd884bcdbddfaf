//! # carenote-text
//!
//! Leaf text components of the deduplication engine: normalization,
//! similarity scoring, sentence splitting, and declarative matcher tables for
//! temporal markers and clinical vocabulary.

pub mod extraction;
pub mod normalizer;
pub mod patterns;
pub mod sentence_splitter;
pub mod similarity;

pub use extraction::EntityExtractor;
pub use normalizer::CanonicalNormalizer;
pub use sentence_splitter::TerminatorSplitter;
pub use similarity::DiceSimilarity;
