//! Split note content into sentences for registry dedup and reassembly.

use carenote_core::traits::ISentenceSplitter;

/// Splits on terminator runs (`.`, `!`, `?`) followed by whitespace or end of
/// text, and on line breaks.
///
/// Terminators at a boundary are consumed; terminators inside a token
/// (`98.6`, `q.i.d`) are kept. Casing and inner punctuation are preserved.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminatorSplitter;

impl TerminatorSplitter {
    pub fn new() -> Self {
        Self
    }
}

impl ISentenceSplitter for TerminatorSplitter {
    fn split(&self, text: &str) -> Vec<String> {
        split_sentences(text)
    }
}

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Split text into trimmed, non-empty sentences without their final terminators.
pub fn split_sentences(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut i = 0;

    while i < len {
        let c = chars[i];

        if c == '\n' || c == '\r' {
            flush(&mut current, &mut sentences);
            i += 1;
            continue;
        }

        if is_terminator(c) {
            let mut end = i;
            while end < len && is_terminator(chars[end]) {
                end += 1;
            }
            let at_boundary = end >= len || chars[end].is_whitespace();
            if at_boundary {
                flush(&mut current, &mut sentences);
            } else {
                current.extend(&chars[i..end]);
            }
            i = end;
            continue;
        }

        current.push(c);
        i += 1;
    }

    // Remaining text that didn't end with punctuation.
    flush(&mut current, &mut sentences);
    sentences
}

fn flush(current: &mut String, sentences: &mut Vec<String>) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
    current.clear();
}
