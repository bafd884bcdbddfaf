//! Configuration for the deduplication engine.
//! TOML-based, layered resolution: overrides > env > project file > defaults.

pub mod dedup_config;
pub mod defaults;

pub use dedup_config::{ConfigOverrides, DedupConfig};
