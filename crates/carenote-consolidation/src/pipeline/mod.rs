//! 6-stage deduplication pipeline orchestrator.
//!
//! Stage 1: Exact → Stage 2: Analyze → Stage 3: Near-duplicate →
//! Stage 4: Sentence → Stage 5: Merge → Stage 6: Chronology

pub mod stage1_exact;
pub mod stage2_analyze;
pub mod stage3_near_duplicate;
pub mod stage4_sentence;
pub mod stage5_merge;
pub mod stage6_chronology;

use carenote_core::config::DedupConfig;
use carenote_core::models::{
    reduction_percent, AnalyzedNote, DedupMetadata, DedupResult, SkipReason, SkippedNote,
};
use carenote_core::traits::ISimilarity;
use tracing::{debug, info, info_span};

use crate::analyzer::NoteAnalyzer;

/// Compare two notes by signature.
///
/// Falls back to normalized content when either signature is empty, so short
/// notes without significant vocabulary are not all treated as identical.
pub fn signature_similarity(
    a: &AnalyzedNote,
    b: &AnalyzedNote,
    similarity: &dyn ISimilarity,
) -> f64 {
    if a.signature.is_empty() || b.signature.is_empty() {
        similarity.score(&a.normalized_content, &b.normalized_content)
    } else {
        similarity.score(&a.signature, &b.signature)
    }
}

/// Run the full 6-stage pipeline over an ordered batch.
///
/// Blank notes are skipped and reported in `metadata.skipped`. A batch with at
/// most one remaining note is passed through untouched.
pub fn run_pipeline<S: AsRef<str>>(
    notes: &[S],
    analyzer: &NoteAnalyzer<'_>,
    similarity: &dyn ISimilarity,
    config: &DedupConfig,
) -> DedupResult {
    let span = info_span!("carenote.dedup", notes = notes.len());
    let _guard = span.enter();

    let mut accepted: Vec<&str> = Vec::with_capacity(notes.len());
    let mut skipped = Vec::new();
    for (index, note) in notes.iter().enumerate() {
        let note = note.as_ref();
        if note.trim().is_empty() {
            debug!(index, "blank note skipped");
            skipped.push(SkippedNote {
                index,
                reason: SkipReason::Blank,
            });
        } else {
            accepted.push(note);
        }
    }

    let original = accepted.len();
    if original <= 1 {
        info!(original, skipped = skipped.len(), "passthrough, nothing to deduplicate");
        return DedupResult {
            deduplicated: accepted.into_iter().map(str::to_string).collect(),
            metadata: DedupMetadata::passthrough(original, skipped),
        };
    }

    // Stage 1: Exact dedup.
    let exact = stage1_exact::remove_exact_duplicates(&accepted, analyzer.normalizer());
    info!(kept = exact.kept.len(), removed = exact.removed, "Stage 1: exact dedup");

    // Stage 2: Analyze.
    let analyzed = stage2_analyze::analyze_notes(&exact.kept, analyzer);
    info!(count = analyzed.len(), "Stage 2: analyzed notes");

    // Stage 3: Near-duplicate collapse.
    let collapse = stage3_near_duplicate::collapse_near_duplicates(
        analyzed,
        similarity,
        config.similarity_threshold,
    );
    info!(
        kept = collapse.kept.len(),
        removed = collapse.removed,
        "Stage 3: near-duplicate collapse"
    );

    // Stage 4: Sentence-level dedup.
    let sentences = stage4_sentence::dedup_sentences(
        collapse.kept,
        analyzer,
        similarity,
        config.similarity_threshold,
    );
    info!(
        kept = sentences.notes.len(),
        sentences_removed = sentences.sentences_removed,
        notes_removed = sentences.notes_removed,
        "Stage 4: sentence dedup"
    );

    // Stage 5: Complementary merge.
    let (notes, merge_count) = if config.merge_complementary {
        let merge = stage5_merge::merge_complementary(sentences.notes, analyzer, similarity);
        info!(kept = merge.notes.len(), merged = merge.merged, "Stage 5: complementary merge");
        (merge.notes, merge.merged)
    } else {
        debug!("Stage 5: complementary merge disabled");
        (sentences.notes, 0)
    };

    // Stage 6: Chronological sort.
    let notes = if config.preserve_chronology {
        let sorted = stage6_chronology::sort_chronologically(notes);
        info!(count = sorted.len(), "Stage 6: chronological sort");
        sorted
    } else {
        debug!("Stage 6: chronological sort disabled");
        notes
    };

    let final_count = notes.len();
    let metadata = DedupMetadata {
        original,
        final_count,
        exact_duplicates_removed: exact.removed,
        near_duplicates_removed: collapse.removed,
        merge_count,
        redundant_notes_removed: sentences.notes_removed,
        sentence_duplicates_removed: sentences.sentences_removed,
        reduction_percent: reduction_percent(original, final_count),
        skipped,
    };

    info!(
        original,
        final_count,
        reduction_percent = metadata.reduction_percent,
        "Deduplication pipeline complete"
    );

    DedupResult {
        deduplicated: notes.into_iter().map(|note| note.content).collect(),
        metadata,
    }
}
