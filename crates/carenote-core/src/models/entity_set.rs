use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Clinical keywords found in a note, one set per category.
///
/// Each term appears at most once regardless of how often the source repeats it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitySet {
    pub procedures: BTreeSet<String>,
    pub medications: BTreeSet<String>,
    pub complications: BTreeSet<String>,
    pub exam_findings: BTreeSet<String>,
}

impl EntitySet {
    /// Per-category union of `self` and `other`, as a new set.
    pub fn union(&self, other: &EntitySet) -> EntitySet {
        EntitySet {
            procedures: self.procedures.union(&other.procedures).cloned().collect(),
            medications: self.medications.union(&other.medications).cloned().collect(),
            complications: self
                .complications
                .union(&other.complications)
                .cloned()
                .collect(),
            exam_findings: self
                .exam_findings
                .union(&other.exam_findings)
                .cloned()
                .collect(),
        }
    }

    /// Total number of terms across all categories.
    pub fn len(&self) -> usize {
        self.procedures.len()
            + self.medications.len()
            + self.complications.len()
            + self.exam_findings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
