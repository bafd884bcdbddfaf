/// Attestation and cross-reference phrases that carry no clinical content.
///
/// Written in normalized form (lower case, no punctuation); matched on whole
/// tokens after normalization.
pub const BOILERPLATE_PHRASES: &[&str] = &[
    "electronically signed by",
    "patient seen and examined",
    "pt seen and examined",
    "agree with above",
    "see prior note",
    "note reviewed and agree",
    "i have reviewed the above",
    "dictated but not read",
];
