/// carenote version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Signature tokens must be longer than this many characters.
pub const SIGNATURE_MIN_TOKEN_EXCLUSIVE: usize = 4;

/// Maximum number of sorted tokens kept in a signature.
pub const SIGNATURE_TOKEN_LIMIT: usize = 50;

/// Sentences shorter than this (in characters) bypass the sentence registry.
pub const MIN_SENTENCE_CHARS: usize = 10;

/// Lower bound (inclusive) of the complementary-merge similarity band.
pub const MERGE_BAND_LOWER: f64 = 0.3;

/// Upper bound (exclusive) of the complementary-merge similarity band.
pub const MERGE_BAND_UPPER: f64 = 0.6;

/// Priority added to a note each time it absorbs a complementary note.
pub const MERGE_PRIORITY_BONUS: f64 = 5.0;

/// Separator used when reassembling sentences into note content.
pub const SENTENCE_JOINER: &str = ". ";

/// Advisory cap on notes per batch. Stages 3 and 5 are quadratic in note count.
pub const MAX_BATCH_NOTES: usize = 500;

// --- Priority weights ---
pub const PRIORITY_LENGTH_DIVISOR: f64 = 100.0;
pub const PRIORITY_ENTITY_WEIGHT: f64 = 10.0;
pub const PRIORITY_MARKER_WEIGHT: f64 = 5.0;
pub const PRIORITY_HIGH_VALUE_WEIGHT: f64 = 15.0;
