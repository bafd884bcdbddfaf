//! Note data model shared across the workspace.

pub mod analyzed_note;
pub mod dedup_result;
pub mod entity_set;
pub mod marker;

pub use analyzed_note::AnalyzedNote;
pub use dedup_result::{reduction_percent, DedupMetadata, DedupResult, SkipReason, SkippedNote};
pub use entity_set::EntitySet;
pub use marker::{Marker, MarkerKind};
