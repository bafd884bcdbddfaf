// Single source of truth for all default values.

// --- Deduplication ---
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.85;
pub const DEFAULT_PRESERVE_CHRONOLOGY: bool = true;
pub const DEFAULT_MERGE_COMPLEMENTARY: bool = true;
pub const DEFAULT_REMOVE_BOILERPLATE: bool = true;

// --- Files & environment ---
pub const PROJECT_CONFIG_FILENAME: &str = "carenote.toml";
pub const ENV_SIMILARITY_THRESHOLD: &str = "CARENOTE_SIMILARITY_THRESHOLD";
pub const ENV_PRESERVE_CHRONOLOGY: &str = "CARENOTE_PRESERVE_CHRONOLOGY";
pub const ENV_MERGE_COMPLEMENTARY: &str = "CARENOTE_MERGE_COMPLEMENTARY";
pub const ENV_REMOVE_BOILERPLATE: &str = "CARENOTE_REMOVE_BOILERPLATE";

// --- Observability ---
pub const ENV_LOG_FILTER: &str = "CARENOTE_LOG";
pub const DEFAULT_LOG_FILTER: &str = "carenote=info";
