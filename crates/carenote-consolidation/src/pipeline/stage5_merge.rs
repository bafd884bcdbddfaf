//! Stage 5: Complementary merge.
//!
//! Related-but-not-duplicate notes (similarity in `[0.3, 0.6)`) that describe
//! the same temporal event are folded into the earlier note.

use std::collections::HashSet;

use carenote_core::constants::MERGE_PRIORITY_BONUS;
use carenote_core::models::AnalyzedNote;
use carenote_core::traits::ISimilarity;
use carenote_text::similarity::in_merge_band;
use tracing::debug;

use super::signature_similarity;
use super::stage4_sentence::reassemble;
use crate::analyzer::NoteAnalyzer;

#[derive(Debug)]
pub struct MergeOutcome {
    pub notes: Vec<AnalyzedNote>,
    pub merged: usize,
}

/// Merge later complementary notes into earlier ones.
///
/// The accumulator keeps absorbing: once `i` has merged `j`, later notes are
/// compared against the merged state.
pub fn merge_complementary(
    notes: Vec<AnalyzedNote>,
    analyzer: &NoteAnalyzer<'_>,
    similarity: &dyn ISimilarity,
) -> MergeOutcome {
    let mut consumed = vec![false; notes.len()];
    let mut merged_notes = Vec::with_capacity(notes.len());
    let mut merged = 0;

    for i in 0..notes.len() {
        if consumed[i] {
            continue;
        }
        let mut accumulator = notes[i].clone();
        // A grown accumulator can come into band with a note it already passed.
        let mut grew = true;
        while grew {
            grew = false;
            for j in (i + 1)..notes.len() {
                if consumed[j] {
                    continue;
                }
                let sim = signature_similarity(&accumulator, &notes[j], similarity);
                if in_merge_band(sim) && shares_temporal_context(&accumulator, &notes[j]) {
                    debug!(into = i, from = j, similarity = sim, "stage 5: complementary merge");
                    accumulator = merge_pair(&accumulator, &notes[j], analyzer);
                    consumed[j] = true;
                    merged += 1;
                    grew = true;
                }
            }
        }
        merged_notes.push(accumulator);
    }

    MergeOutcome {
        notes: merged_notes,
        merged,
    }
}

/// Same POD value on both sides, else the same date string. Notes without
/// markers never share context.
pub fn shares_temporal_context(a: &AnalyzedNote, b: &AnalyzedNote) -> bool {
    let a_pods: HashSet<&str> = a.pod_values().collect();
    if b.pod_values().any(|v| a_pods.contains(v)) {
        return true;
    }
    let a_dates: HashSet<&str> = a.date_values().collect();
    b.date_values().any(|v| a_dates.contains(v))
}

/// Fold `other` into `base` as a new note.
///
/// Sentences are unioned by normalized text with `base` first. The merged
/// content is re-analyzed, so marker positions are offsets into it and the
/// result sorts the same way when it is analyzed again.
pub fn merge_pair(
    base: &AnalyzedNote,
    other: &AnalyzedNote,
    analyzer: &NoteAnalyzer<'_>,
) -> AnalyzedNote {
    let normalizer = analyzer.normalizer();

    let mut seen: HashSet<String> = HashSet::new();
    let mut sentences = Vec::with_capacity(base.sentences.len() + other.sentences.len());
    for sentence in base.sentences.iter().chain(&other.sentences) {
        if seen.insert(normalizer.normalize(sentence)) {
            sentences.push(sentence.clone());
        }
    }

    let priority = base.priority.max(other.priority) + MERGE_PRIORITY_BONUS;
    let mut merged = analyzer.rebuild(reassemble(&sentences), priority);
    merged.entities = base.entities.union(&other.entities);
    merged
}

#[cfg(test)]
mod tests {
    use carenote_core::models::{Marker, MarkerKind};
    use carenote_text::{CanonicalNormalizer, DiceSimilarity, EntityExtractor, TerminatorSplitter};

    use super::*;

    const FIRST: &str = "POD#2 after craniotomy. Incision clean and dry. Neuro exam intact.";
    const SECOND: &str =
        "POD#2 craniotomy. Ambulating independently. Pain controlled with oral medication.";

    fn bare(markers: Vec<Marker>) -> AnalyzedNote {
        AnalyzedNote {
            content: String::new(),
            normalized_content: String::new(),
            sentences: vec![],
            word_count: 0,
            temporal_markers: markers,
            entities: Default::default(),
            signature: String::new(),
            priority: 0.0,
        }
    }

    #[test]
    fn temporal_context_prefers_pod_then_date() {
        let pod1 = Marker::new(MarkerKind::Pod, "1", 0);
        let pod2 = Marker::new(MarkerKind::Pod, "2", 0);
        let date = Marker::new(MarkerKind::Date, "3/14/2024", 5);
        let today = Marker::new(MarkerKind::Relative, "today", 0);

        assert!(shares_temporal_context(&bare(vec![pod1.clone()]), &bare(vec![pod1.clone()])));
        assert!(!shares_temporal_context(&bare(vec![pod1.clone()]), &bare(vec![pod2.clone()])));
        assert!(shares_temporal_context(
            &bare(vec![pod1, date.clone()]),
            &bare(vec![pod2, date])
        ));
        // Relative phrases are not shared context.
        assert!(!shares_temporal_context(&bare(vec![today.clone()]), &bare(vec![today])));
        assert!(!shares_temporal_context(&bare(vec![]), &bare(vec![])));
    }

    #[test]
    fn merges_complementary_notes_on_same_pod() {
        let normalizer = CanonicalNormalizer::default();
        let extractor = EntityExtractor::default();
        let analyzer = NoteAnalyzer::new(&normalizer, &TerminatorSplitter, &extractor);
        let first = analyzer.analyze(FIRST);
        let second = analyzer.analyze(SECOND);
        let top_priority = first.priority.max(second.priority);

        let outcome = merge_complementary(vec![first, second], &analyzer, &DiceSimilarity);
        assert_eq!(outcome.merged, 1);
        assert_eq!(outcome.notes.len(), 1);

        let merged = &outcome.notes[0];
        assert_eq!(
            merged.content,
            "POD#2 after craniotomy. Incision clean and dry. Neuro exam intact. \
             POD#2 craniotomy. Ambulating independently. Pain controlled with oral medication."
        );
        assert_eq!(merged.priority, top_priority + MERGE_PRIORITY_BONUS);
        assert_eq!(merged.temporal_markers.len(), 2);
        assert!(merged.entities.procedures.contains("craniotomy"));
    }

    #[test]
    fn different_pod_blocks_merge() {
        let normalizer = CanonicalNormalizer::default();
        let extractor = EntityExtractor::default();
        let analyzer = NoteAnalyzer::new(&normalizer, &TerminatorSplitter, &extractor);
        let notes = vec![
            analyzer.analyze(FIRST),
            analyzer.analyze(&SECOND.replace("POD#2", "POD#3")),
        ];
        let outcome = merge_complementary(notes, &analyzer, &DiceSimilarity);
        assert_eq!(outcome.merged, 0);
        assert_eq!(outcome.notes.len(), 2);
    }

    #[test]
    fn merge_pair_unions_sentences_by_normalized_text() {
        let normalizer = CanonicalNormalizer::default();
        let extractor = EntityExtractor::default();
        let analyzer = NoteAnalyzer::new(&normalizer, &TerminatorSplitter, &extractor);
        let a = analyzer.analyze("POD#1 afebrile. Drain in place.");
        let b = analyzer.analyze("pod#1 AFEBRILE! Tolerating diet. POD#1 afebrile.");

        let merged = merge_pair(&a, &b, &analyzer);
        assert_eq!(
            merged.sentences,
            vec!["POD#1 afebrile", "Drain in place", "Tolerating diet"]
        );
        assert_eq!(merged.content, "POD#1 afebrile. Drain in place. Tolerating diet.");
        // Re-extracted from the merged content; the repeated sentence is gone.
        let positions: Vec<_> = merged.temporal_markers.iter().map(|m| m.position).collect();
        assert_eq!(positions, vec![0]);
        // Inputs are untouched.
        assert_eq!(a.content, "POD#1 afebrile. Drain in place.");
    }

    #[test]
    fn merged_markers_point_into_merged_content() {
        let normalizer = CanonicalNormalizer::default();
        let extractor = EntityExtractor::default();
        let analyzer = NoteAnalyzer::new(&normalizer, &TerminatorSplitter, &extractor);
        let a = analyzer.analyze("Incision clean and dry. POD#2 craniotomy.");
        let b = analyzer.analyze("POD#2 after craniotomy.");

        let merged = merge_pair(&a, &b, &analyzer);
        assert_eq!(
            merged.content,
            "Incision clean and dry. POD#2 craniotomy. POD#2 after craniotomy."
        );
        let positions: Vec<_> = merged.temporal_markers.iter().map(|m| m.position).collect();
        assert_eq!(positions, vec![24, 42]);
        let reanalyzed = analyzer.analyze(&merged.content);
        assert_eq!(merged.temporal_markers, reanalyzed.temporal_markers);
    }

    #[test]
    fn grown_accumulator_rescans_notes_it_passed() {
        let normalizer = CanonicalNormalizer::default();
        let extractor = EntityExtractor::default();
        let analyzer = NoteAnalyzer::new(&normalizer, &TerminatorSplitter, &extractor);
        // The second note is out of band with the first until the third is absorbed.
        let notes = vec![
            analyzer.analyze("POD#2 craniotomy."),
            analyzer.analyze("Post-op day 2 labs reviewed. Afebrile overnight."),
            analyzer.analyze("Potassium replaced overnight. POD#2 after craniotomy."),
        ];

        let outcome = merge_complementary(notes, &analyzer, &DiceSimilarity);
        assert_eq!(outcome.merged, 2);
        assert_eq!(
            outcome.notes[0].content,
            "POD#2 craniotomy. Potassium replaced overnight. POD#2 after craniotomy. \
             Post-op day 2 labs reviewed. Afebrile overnight."
        );
    }
}
