//! Declarative matcher tables: temporal markers, clinical vocabularies, and
//! boilerplate phrases.
//!
//! Each table is plain data and can be inspected or extended without touching
//! the pipeline.

pub mod boilerplate;
pub mod temporal;
pub mod vocabulary;

use std::sync::LazyLock;

use regex::Regex;

/// Byte offset → character offset within `text`.
pub(crate) fn char_offset(text: &str, byte_offset: usize) -> usize {
    text.get(..byte_offset)
        .map(|prefix| prefix.chars().count())
        .unwrap_or(0)
}

/// Whether a lazily compiled table entry compiled successfully.
pub fn is_compiled(regex: &LazyLock<Option<Regex>>) -> bool {
    regex.is_some()
}
