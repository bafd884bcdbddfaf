//! Stage 4: Sentence-level global dedup.
//!
//! One registry of normalized sentences spans every note in survivor order,
//! so a sentence restated in a later note is dropped from that note.

use carenote_core::constants::{MIN_SENTENCE_CHARS, SENTENCE_JOINER};
use carenote_core::models::AnalyzedNote;
use carenote_core::traits::ISimilarity;
use carenote_text::similarity::is_duplicate;
use tracing::debug;

use crate::analyzer::NoteAnalyzer;

#[derive(Debug)]
pub struct SentenceOutcome {
    pub notes: Vec<AnalyzedNote>,
    pub sentences_removed: usize,
    /// Notes with no sentence left after dedup.
    pub notes_removed: usize,
}

/// Drop sentences already said by an earlier note.
///
/// Sentences shorter than `MIN_SENTENCE_CHARS` are kept without being
/// checked or registered. A note that loses nothing keeps its content
/// verbatim; otherwise it is reassembled from the surviving sentences and
/// re-analyzed with its priority carried over.
pub fn dedup_sentences(
    notes: Vec<AnalyzedNote>,
    analyzer: &NoteAnalyzer<'_>,
    similarity: &dyn ISimilarity,
    threshold: f64,
) -> SentenceOutcome {
    let normalizer = analyzer.normalizer();
    let mut registry: Vec<String> = Vec::new();
    let mut survivors = Vec::with_capacity(notes.len());
    let mut sentences_removed = 0;
    let mut notes_removed = 0;

    for (index, note) in notes.into_iter().enumerate() {
        let mut retained: Vec<&str> = Vec::with_capacity(note.sentences.len());
        let mut dropped = 0;

        for sentence in &note.sentences {
            if sentence.chars().count() < MIN_SENTENCE_CHARS {
                retained.push(sentence);
                continue;
            }
            let key = normalizer.normalize(sentence);
            let seen = registry
                .iter()
                .any(|prior| is_duplicate(similarity.score(&key, prior), threshold));
            if seen {
                dropped += 1;
            } else {
                registry.push(key);
                retained.push(sentence);
            }
        }

        if dropped == 0 {
            survivors.push(note);
            continue;
        }

        sentences_removed += dropped;
        if retained.is_empty() {
            debug!(index, dropped, "stage 4: note fully covered by earlier notes");
            notes_removed += 1;
            continue;
        }

        debug!(index, dropped, "stage 4: note reassembled");
        let content = reassemble(&retained);
        survivors.push(analyzer.rebuild(content, note.priority));
    }

    SentenceOutcome {
        notes: survivors,
        sentences_removed,
        notes_removed,
    }
}

/// Join sentences with `". "` and close with a period.
pub fn reassemble<S: AsRef<str>>(sentences: &[S]) -> String {
    let mut content = sentences
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(SENTENCE_JOINER);
    content.push('.');
    content
}
