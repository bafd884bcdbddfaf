//! Canonical text form used for exact-duplicate equality, sentence registry
//! keys, and signatures.

use carenote_core::traits::INormalizer;

use crate::patterns::boilerplate::BOILERPLATE_PHRASES;

/// Lower-cases, drops punctuation, and collapses whitespace.
///
/// With boilerplate removal enabled, whole-token occurrences of the phrase
/// table are removed as well. This is the only place the `remove_boilerplate`
/// option takes effect.
#[derive(Debug, Clone)]
pub struct CanonicalNormalizer {
    /// Tokenized phrases; empty when boilerplate removal is off.
    boilerplate: Vec<Vec<String>>,
}

impl CanonicalNormalizer {
    /// Normalizer using the built-in boilerplate table when `remove_boilerplate` is set.
    pub fn new(remove_boilerplate: bool) -> Self {
        if remove_boilerplate {
            Self::with_boilerplate(BOILERPLATE_PHRASES)
        } else {
            Self {
                boilerplate: Vec::new(),
            }
        }
    }

    /// Normalizer removing a caller-supplied phrase table.
    pub fn with_boilerplate<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let boilerplate = phrases
            .into_iter()
            .map(|p| {
                canonicalize(p.as_ref())
                    .split(' ')
                    .filter(|t| !t.is_empty())
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .filter(|tokens| !tokens.is_empty())
            .collect();
        Self { boilerplate }
    }

    pub fn removes_boilerplate(&self) -> bool {
        !self.boilerplate.is_empty()
    }

    /// Remove phrase occurrences until none remain, so removal that joins
    /// two fragments into a new phrase is also caught.
    fn strip_boilerplate(&self, canonical: &str) -> String {
        let mut tokens: Vec<&str> = canonical.split(' ').filter(|t| !t.is_empty()).collect();
        loop {
            let mut kept = Vec::with_capacity(tokens.len());
            let mut changed = false;
            let mut i = 0;
            while i < tokens.len() {
                match self
                    .boilerplate
                    .iter()
                    .find(|phrase| phrase_at(&tokens[i..], phrase))
                {
                    Some(phrase) => {
                        i += phrase.len();
                        changed = true;
                    }
                    None => {
                        kept.push(tokens[i]);
                        i += 1;
                    }
                }
            }
            tokens = kept;
            if !changed {
                break;
            }
        }
        tokens.join(" ")
    }
}

impl Default for CanonicalNormalizer {
    fn default() -> Self {
        Self::new(true)
    }
}

impl INormalizer for CanonicalNormalizer {
    fn normalize(&self, text: &str) -> String {
        let canonical = canonicalize(text);
        if self.boilerplate.is_empty() {
            canonical
        } else {
            self.strip_boilerplate(&canonical)
        }
    }
}

fn phrase_at(tokens: &[&str], phrase: &[String]) -> bool {
    tokens.len() >= phrase.len() && tokens.iter().zip(phrase).all(|(t, p)| *t == p.as_str())
}

/// Lower-case, keep only alphanumerics and whitespace, collapse whitespace.
pub fn canonicalize(text: &str) -> String {
    let stripped: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}
