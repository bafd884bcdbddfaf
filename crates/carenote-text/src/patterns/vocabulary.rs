/// Entity category a vocabulary populates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityCategory {
    Procedure,
    Medication,
    Complication,
    ExamFinding,
}

/// A fixed list of terms matched case-insensitively as substrings.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    pub name: String,
    pub category: EntityCategory,
    /// Lower-cased terms.
    pub terms: Vec<String>,
}

impl Vocabulary {
    pub fn new<I, S>(name: impl Into<String>, category: EntityCategory, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            name: name.into(),
            category,
            terms: terms
                .into_iter()
                .map(|t| t.as_ref().trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }
}

pub const PROCEDURE_TERMS: &[&str] = &[
    "craniotomy",
    "craniectomy",
    "laminectomy",
    "discectomy",
    "fusion",
    "ventriculostomy",
    "shunt",
    "biopsy",
    "resection",
    "tracheostomy",
    "intubation",
    "lumbar puncture",
    "angiogram",
    "embolization",
    "thrombectomy",
    "debridement",
    "appendectomy",
    "cholecystectomy",
    "colectomy",
    "arthroplasty",
];

pub const COMPLICATION_TERMS: &[&str] = &[
    "infection",
    "hemorrhage",
    "hematoma",
    "csf leak",
    "seizure",
    "stroke",
    "pneumonia",
    "dvt",
    "pulmonary embolism",
    "sepsis",
    "delirium",
    "dehiscence",
    "hydrocephalus",
    "vasospasm",
    "ileus",
    "urinary retention",
];

/// Terms that mark a note as carrying summary-level clinical content.
pub const HIGH_VALUE_TERMS: &[&str] = &[
    "operative",
    "procedure",
    "impression",
    "assessment",
    "discharge",
    "follow-up",
    "plan",
    "diagnosis",
];

/// Built-in vocabularies. Medication and exam-finding categories are filled
/// by richer extractors layered on top.
pub fn default_vocabularies() -> Vec<Vocabulary> {
    vec![
        Vocabulary::new("procedures", EntityCategory::Procedure, PROCEDURE_TERMS),
        Vocabulary::new("complications", EntityCategory::Complication, COMPLICATION_TERMS),
    ]
}
