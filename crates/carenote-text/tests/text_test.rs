//! Integration tests for carenote-text: matcher tables and leaf components
//! used together the way the analyzer uses them.

use carenote_core::models::MarkerKind;
use carenote_core::traits::{INormalizer, ISentenceSplitter, ISimilarity};

use carenote_text::patterns::temporal::all_patterns;
use carenote_text::patterns::vocabulary::{default_vocabularies, EntityCategory, Vocabulary};
use carenote_text::patterns::{boilerplate::BOILERPLATE_PHRASES, is_compiled};
use carenote_text::{CanonicalNormalizer, DiceSimilarity, EntityExtractor, TerminatorSplitter};

#[test]
fn every_temporal_pattern_compiles() {
    for pattern in all_patterns() {
        assert!(is_compiled(pattern.regex), "pattern {} failed to compile", pattern.name);
    }
}

#[test]
fn boilerplate_table_is_already_normalized() {
    let normalizer = CanonicalNormalizer::new(false);
    for phrase in BOILERPLATE_PHRASES {
        assert_eq!(normalizer.normalize(phrase), *phrase);
    }
}

#[test]
fn vocabulary_terms_are_lowercase_and_non_empty() {
    for vocabulary in default_vocabularies() {
        assert!(!vocabulary.terms.is_empty(), "{} is empty", vocabulary.name);
        for term in &vocabulary.terms {
            assert_eq!(term, &term.to_lowercase());
        }
    }
}

#[test]
fn vocabulary_constructor_trims_and_drops_blank_terms() {
    let vocabulary = Vocabulary::new("exam", EntityCategory::ExamFinding, ["  Papilledema ", "", "  "]);
    assert_eq!(vocabulary.terms, vec!["papilledema"]);
}

#[test]
fn clinical_note_end_to_end() {
    let note = "POD#2 s/p craniotomy. Tmax 98.6, no seizure overnight. Assessment: stable.";

    let sentences = TerminatorSplitter.split(note);
    assert_eq!(
        sentences,
        vec![
            "POD#2 s/p craniotomy",
            "Tmax 98.6, no seizure overnight",
            "Assessment: stable"
        ]
    );

    let extractor = EntityExtractor::default();
    let markers = extractor.extract_temporal_markers(note);
    assert_eq!(markers.len(), 1);
    assert_eq!(markers[0].kind, MarkerKind::Pod);
    assert_eq!(markers[0].value, "2");

    let entities = extractor.extract_key_entities(note);
    assert!(entities.procedures.contains("craniotomy"));
    assert!(entities.complications.contains("seizure"));
    assert_eq!(extractor.count_high_value_keywords(note), 1);

    let normalized = CanonicalNormalizer::default().normalize(note);
    assert_eq!(
        normalized,
        "pod2 sp craniotomy tmax 986 no seizure overnight assessment stable"
    );
}

#[test]
fn near_duplicate_notes_score_above_default_threshold() {
    let normalizer = CanonicalNormalizer::default();
    let a = normalizer.normalize("Pt underwent craniotomy POD1. Doing well. Vitals stable.");
    let b = normalizer.normalize("Patient underwent craniotomy POD1. Doing well. Vitals stable.");
    let sim = DiceSimilarity.score(&a, &b);
    assert!(sim >= 0.85, "similarity {sim}");
    assert!(sim < 1.0);
}

#[test]
fn unrelated_notes_score_low() {
    let sim = DiceSimilarity.score(
        "wound clean dry intact staples in place",
        "potassium replaced overnight recheck morning labs",
    );
    assert!(sim < 0.3, "similarity {sim}");
}
