//! Deduplication monitoring: run counters aggregated across batches.

pub mod dashboard;

pub use dashboard::DedupDashboard;
