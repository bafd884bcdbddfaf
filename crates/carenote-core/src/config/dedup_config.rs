//! Deduplication configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::defaults;
use crate::errors::ConfigError;

/// Options accepted by the deduplication engine.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via [`ConfigOverrides`])
/// 2. Environment variables (`CARENOTE_*`)
/// 3. Project config (`carenote.toml`, `[dedup]` table)
/// 4. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DedupConfig {
    /// Similarity at or above which two signatures (stage 3) or two
    /// sentences (stage 4) are treated as duplicates. Must lie in `[0, 1]`.
    pub similarity_threshold: f64,
    /// Gate for the chronological sort (stage 6).
    pub preserve_chronology: bool,
    /// Gate for the complementary merge (stage 5).
    pub merge_complementary: bool,
    /// Strip boilerplate phrases during normalization.
    pub remove_boilerplate: bool,
}

impl Default for DedupConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: defaults::DEFAULT_SIMILARITY_THRESHOLD,
            preserve_chronology: defaults::DEFAULT_PRESERVE_CHRONOLOGY,
            merge_complementary: defaults::DEFAULT_MERGE_COMPLEMENTARY,
            remove_boilerplate: defaults::DEFAULT_REMOVE_BOILERPLATE,
        }
    }
}

/// Partial configuration. `Some` values win over the layer below.
///
/// Also the schema of the `[dedup]` table in `carenote.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigOverrides {
    pub similarity_threshold: Option<f64>,
    pub preserve_chronology: Option<bool>,
    pub merge_complementary: Option<bool>,
    pub remove_boilerplate: Option<bool>,
}

/// On-disk layout of `carenote.toml`. Unknown tables are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    dedup: ConfigOverrides,
}

#[derive(Serialize)]
struct ConfigDocument<'a> {
    dedup: &'a DedupConfig,
}

impl DedupConfig {
    /// Load configuration with layered resolution rooted at `root`.
    ///
    /// A missing `carenote.toml` falls back to defaults. The resolved config
    /// is validated before it is returned.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(defaults::PROJECT_CONFIG_FILENAME);
        if project_config_path.exists() {
            let file = Self::read_config_file(&project_config_path)?;
            config.apply_overrides(&file.dedup);
        }

        config.apply_env_overrides();

        if let Some(overrides) = overrides {
            config.apply_overrides(overrides);
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse a `carenote.toml` document (defaults fill missing fields).
    ///
    /// Not validated; call [`DedupConfig::validate`] before use.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        let mut config = Self::default();
        config.apply_overrides(&file.dedup);
        Ok(config)
    }

    /// Serialize the config back to a `carenote.toml` document.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(&ConfigDocument { dedup: self }).map_err(|e| {
            ConfigError::ParseError {
                path: "<serialization>".to_string(),
                message: e.to_string(),
            }
        })
    }

    /// Reject values the pipeline cannot honor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // NaN fails the range check as well.
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(ConfigError::ConfigurationError {
                field: "dedup.similarity_threshold".to_string(),
                message: format!(
                    "must be between 0.0 and 1.0, got {}",
                    self.similarity_threshold
                ),
            });
        }
        Ok(())
    }

    /// Apply every `Some` field of `overrides`.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(v) = overrides.similarity_threshold {
            self.similarity_threshold = v;
        }
        if let Some(v) = overrides.preserve_chronology {
            self.preserve_chronology = v;
        }
        if let Some(v) = overrides.merge_complementary {
            self.merge_complementary = v;
        }
        if let Some(v) = overrides.remove_boilerplate {
            self.remove_boilerplate = v;
        }
    }

    fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Apply environment variable overrides. Unparseable values are ignored.
    fn apply_env_overrides(&mut self) {
        let overrides = ConfigOverrides {
            similarity_threshold: env_value(defaults::ENV_SIMILARITY_THRESHOLD),
            preserve_chronology: env_value(defaults::ENV_PRESERVE_CHRONOLOGY),
            merge_complementary: env_value(defaults::ENV_MERGE_COMPLEMENTARY),
            remove_boilerplate: env_value(defaults::ENV_REMOVE_BOILERPLATE),
        };
        self.apply_overrides(&overrides);
    }
}

fn env_value<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!(key, value = %raw, "ignoring unparseable environment override");
            None
        }
    }
}
