use std::sync::LazyLock;

use carenote_core::models::MarkerKind;
use regex::Regex;

/// A compiled temporal marker pattern.
pub struct TemporalPattern {
    pub name: &'static str,
    pub kind: MarkerKind,
    pub regex: &'static LazyLock<Option<Regex>>,
    /// Capture group holding the marker value; 0 is the whole match.
    pub value_group: usize,
    /// Lower-case the captured value (relative phrases).
    pub lowercase_value: bool,
}

macro_rules! temporal_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// ── Absolute dates: 3/14/2024, 03-14-24 ───────────────────────────────────
temporal_pattern!(RE_DATE, r"\b\d{1,2}[/-]\d{1,2}[/-]\d{2,4}\b");

// ── Post-operative day: POD#1, POD 1, POD1 ────────────────────────────────
temporal_pattern!(RE_POD, r"(?i)\bPOD\s*#?\s*(\d{1,3})\b");

// ── Post-operative day, spelled out: post-op day 2, postoperative day #3 ──
temporal_pattern!(
    RE_POSTOP_DAY,
    r"(?i)\bpost[- ]?op(?:erative)?\s+day\s*#?\s*(\d{1,3})\b"
);

// ── Relative time: yesterday, today, this morning, 3 days ago ─────────────
temporal_pattern!(
    RE_RELATIVE,
    r"(?i)\b(?:yesterday|today|this\s+morning|\d+\s+days?\s+ago)\b"
);

/// All temporal patterns. Markers found at the same position keep this order.
pub fn all_patterns() -> Vec<TemporalPattern> {
    vec![
        TemporalPattern {
            name: "date",
            kind: MarkerKind::Date,
            regex: &RE_DATE,
            value_group: 0,
            lowercase_value: false,
        },
        TemporalPattern {
            name: "pod",
            kind: MarkerKind::Pod,
            regex: &RE_POD,
            value_group: 1,
            lowercase_value: false,
        },
        TemporalPattern {
            name: "postop_day",
            kind: MarkerKind::Pod,
            regex: &RE_POSTOP_DAY,
            value_group: 1,
            lowercase_value: false,
        },
        TemporalPattern {
            name: "relative",
            kind: MarkerKind::Relative,
            regex: &RE_RELATIVE,
            value_group: 0,
            lowercase_value: true,
        },
    ]
}
