//! Property tests for carenote-text: similarity contracts and normalizer idempotence.

use proptest::prelude::*;

use carenote_core::traits::{INormalizer, ISentenceSplitter, ISimilarity};
use carenote_text::{CanonicalNormalizer, DiceSimilarity, TerminatorSplitter};

fn note_text() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 .,!?#/\\-\n]{0,80}"
}

proptest! {
    #[test]
    fn prop_similarity_is_symmetric(a in note_text(), b in note_text()) {
        let ab = DiceSimilarity.score(&a, &b);
        let ba = DiceSimilarity.score(&b, &a);
        prop_assert!((ab - ba).abs() < 1e-12);
    }

    #[test]
    fn prop_similarity_is_bounded(a in note_text(), b in note_text()) {
        let sim = DiceSimilarity.score(&a, &b);
        prop_assert!((0.0..=1.0).contains(&sim));
    }

    #[test]
    fn prop_similarity_is_reflexive(a in note_text()) {
        prop_assert_eq!(DiceSimilarity.score(&a, &a), 1.0);
    }

    #[test]
    fn prop_normalizer_is_idempotent(text in note_text(), boilerplate in any::<bool>()) {
        let normalizer = CanonicalNormalizer::new(boilerplate);
        let once = normalizer.normalize(&text);
        prop_assert_eq!(normalizer.normalize(&once), once);
    }

    #[test]
    fn prop_normalized_text_has_no_punctuation_or_padding(text in note_text()) {
        let normalized = CanonicalNormalizer::new(false).normalize(&text);
        prop_assert!(normalized.chars().all(|c| c.is_alphanumeric() || c == ' '));
        prop_assert_eq!(normalized.trim(), normalized.as_str());
        prop_assert!(!normalized.contains("  "));
    }

    #[test]
    fn prop_sentences_are_trimmed_and_non_empty(text in note_text()) {
        for sentence in TerminatorSplitter.split(&text) {
            prop_assert!(!sentence.is_empty());
            prop_assert_eq!(sentence.trim(), sentence.as_str());
            prop_assert!(!sentence.contains('\n'));
        }
    }
}
