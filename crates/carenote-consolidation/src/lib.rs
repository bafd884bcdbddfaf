//! # carenote-consolidation
//!
//! 6-stage note deduplication pipeline: exact dedup → analyze → near-duplicate
//! collapse → sentence-level dedup → complementary merge → chronological sort.
//! Caller-owned engine over pluggable text capabilities, plus a run dashboard.

pub mod analyzer;
pub mod engine;
pub mod monitoring;
pub mod pipeline;

pub use analyzer::NoteAnalyzer;
pub use engine::DedupEngine;
pub use monitoring::DedupDashboard;
