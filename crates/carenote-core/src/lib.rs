//! # carenote-core
//!
//! Foundation crate for the carenote note deduplication engine.
//! Defines the note data model, capability traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod tracing_setup;

// Re-export the most commonly used types at the crate root.
pub use config::DedupConfig;
pub use errors::{CarenoteError, CarenoteResult};
pub use models::{
    AnalyzedNote, DedupMetadata, DedupResult, EntitySet, Marker, MarkerKind, SkipReason,
    SkippedNote,
};
