//! Test fixture loader for carenote golden datasets.
//!
//! Provides typed deserialization of fixture JSON files and helper functions
//! for loading them in tests across crates.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// A golden deduplication scenario: input batch, config overrides, expected output.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenScenario {
    pub description: String,
    /// Partial `[dedup]` settings in snake_case; missing keys use defaults.
    #[serde(default)]
    pub config: serde_json::Value,
    /// Raw JSON entries, fed through the JSON boundary.
    pub input: Vec<serde_json::Value>,
    pub expected: GoldenExpectation,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoldenExpectation {
    pub deduplicated: Vec<String>,
    /// Subset of result metadata in its serialized (camelCase) form.
    pub metadata: serde_json::Value,
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Load a golden deduplication scenario.
pub fn load_scenario(relative_path: &str) -> GoldenScenario {
    load_fixture(relative_path)
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all JSON files in a fixture subdirectory, sorted by path.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    files.sort();
    files
}
