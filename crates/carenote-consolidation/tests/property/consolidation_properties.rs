//! Property tests for carenote-consolidation: determinism, idempotence, and
//! count invariants.

use proptest::prelude::*;

use carenote_core::config::DedupConfig;
use carenote_consolidation::DedupEngine;

/// Notes covering every stage: exact and near duplicates, a complementary
/// pair, sentence overlap, and short markerless notes.
const POOL: &[&str] = &[
    "Pt underwent craniotomy POD1. Doing well. Vitals stable.",
    "Patient underwent craniotomy POD1. Doing well. Vitals stable.",
    "POD#2 after craniotomy. Incision clean and dry. Neuro exam intact.",
    "POD#2 craniotomy. Ambulating independently. Pain controlled with oral medication.",
    "POD#3 evening check. Drain removed without difficulty.",
    "Potassium replaced overnight. Recheck morning labs.",
    "Afebrile overnight, tolerating diet.",
    "Incision clean and dry. Drain removed today.",
    "A",
    "B",
];

fn pooled_batch() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(0..POOL.len(), 0..6)
        .prop_map(|picks| picks.into_iter().map(|i| POOL[i].to_string()).collect())
}

/// Clinical sentences sharing PODs, dates, and vocabulary, so random
/// combinations reach every stage including chained merges.
const SENTENCES: &[&str] = &[
    "Incision clean and dry",
    "POD#2 craniotomy",
    "POD#2 after craniotomy",
    "POD#3 evening check",
    "Drain removed without difficulty",
    "Neuro exam intact",
    "Ambulating independently",
    "Pain controlled with oral medication",
    "Afebrile overnight",
    "Seen 3/14/2024 for wound check",
    "Post-op day 2 labs reviewed",
    "Potassium replaced overnight",
    "No seizure activity today",
    "Plan discharge tomorrow",
    "Tolerating diet",
];

fn composed_note() -> impl Strategy<Value = String> {
    prop::sample::subsequence(SENTENCES, 1..=3)
        .prop_shuffle()
        .prop_map(|sentences| format!("{}.", sentences.join(". ")))
}

fn composed_batch() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(composed_note(), 2..=6)
}

fn free_text_batch() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Za-z0-9 .#/]{0,60}", 0..8)
}

fn engine() -> DedupEngine {
    DedupEngine::new(DedupConfig::default()).unwrap()
}

proptest! {
    #[test]
    fn prop_idempotent(batch in pooled_batch()) {
        let engine = engine();
        let once = engine.deduplicate(&batch).unwrap();
        let twice = engine.deduplicate(&once.deduplicated).unwrap();
        prop_assert_eq!(twice.deduplicated, once.deduplicated);
    }

    #[test]
    fn prop_idempotent_on_composed_notes(batch in composed_batch()) {
        let engine = engine();
        let once = engine.deduplicate(&batch).unwrap();
        let twice = engine.deduplicate(&once.deduplicated).unwrap();
        prop_assert_eq!(twice.deduplicated, once.deduplicated);
    }

    #[test]
    fn prop_deterministic(batch in free_text_batch()) {
        let r1 = engine().deduplicate(&batch).unwrap();
        let r2 = engine().deduplicate(&batch).unwrap();
        prop_assert_eq!(r1, r2);
    }

    #[test]
    fn prop_counts_balance(batch in free_text_batch()) {
        let result = engine().deduplicate(&batch).unwrap();
        let meta = &result.metadata;
        prop_assert_eq!(meta.original + meta.skipped.len(), batch.len());
        prop_assert_eq!(meta.final_count, result.deduplicated.len());
        prop_assert!(meta.final_count <= meta.original);
        prop_assert_eq!(meta.original - meta.final_count, meta.removed());
        prop_assert!(meta.reduction_percent <= 100);
    }

    #[test]
    fn prop_output_never_grows(batch in pooled_batch()) {
        let result = engine().deduplicate(&batch).unwrap();
        prop_assert!(result.deduplicated.len() <= batch.len());
    }

    #[test]
    fn prop_gates_off_never_merge(batch in pooled_batch()) {
        let engine = DedupEngine::new(DedupConfig {
            merge_complementary: false,
            ..Default::default()
        })
        .unwrap();
        let result = engine.deduplicate(&batch).unwrap();
        prop_assert_eq!(result.metadata.merge_count, 0);
    }
}
