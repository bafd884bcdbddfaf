use serde::{Deserialize, Serialize};

/// Kind of temporal anchor found in a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    /// Absolute date such as `12/03/2024`.
    Date,
    /// Post-operative day such as `POD#2`.
    Pod,
    /// Relative phrase such as `yesterday` or `3 days ago`.
    Relative,
}

/// A temporal marker located in a note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marker {
    pub kind: MarkerKind,
    /// Date string as written, POD day digits, or the lower-cased phrase.
    pub value: String,
    /// Character offset in the originating note.
    pub position: usize,
}

impl Marker {
    pub fn new(kind: MarkerKind, value: impl Into<String>, position: usize) -> Self {
        Self {
            kind,
            value: value.into(),
            position,
        }
    }

    pub fn is_pod(&self) -> bool {
        self.kind == MarkerKind::Pod
    }

    pub fn is_date(&self) -> bool {
        self.kind == MarkerKind::Date
    }
}
