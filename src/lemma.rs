//! Affix stripping: reduces an inflected surface word to its lemma.

use crate::exceptions::ExceptionIndex;

// Insertion order matters for the prefixes (they are scanned as listed);
// the suffix tables are re-sorted longest-first at match time.
const NUMBER_PREFIXES: &[&str] = &["ay", "me", "pxe"];
const CASE_SUFFIXES: &[&str] = &["l", "ìl", "ti", "it", "ru", "ìri", "yä", "ri", "ä"];
const VERB_SUFFIXES: &[&str] = &["ie", "i", "u", "ìm"];

/// Reduces surface words to dictionary lemmas by consulting the exception
/// index first and then stripping at most one number prefix, one case
/// suffix, and one verb suffix, in that fixed order.
#[derive(Clone, Debug, Default)]
pub struct Lemmatizer {
    exceptions: ExceptionIndex,
}

impl Lemmatizer {
    /// A lemmatizer with no exception table: regular rules only.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_exceptions(exceptions: ExceptionIndex) -> Self {
        Lemmatizer { exceptions }
    }

    pub fn exceptions(&self) -> &ExceptionIndex {
        &self.exceptions
    }

    /// Returns the lemma for a surface word. This is a total function: a
    /// word no rule matches comes back unchanged (lowercased), and the
    /// empty string is valid input.
    ///
    /// Each stripping stage runs once whether or not the previous stage
    /// matched; no stage is reapplied to its own output.
    pub fn lemmatize(&self, word: &str) -> String {
        let word = word.to_lowercase();

        if let Some(lemma) = self.exceptions.lookup(&word) {
            tracing::debug!(word = %word, lemma = %lemma, "lemmatized from exception table");
            return lemma.to_string();
        }

        let word = strip_number_prefix(&word);
        let word = strip_case_suffix(word);
        let word = strip_verb_suffix(word);
        word.to_string()
    }
}

// Prefixes are tried in table order, not longest-first. At most one is
// removed, and only when more than prefix length + 1 characters remain.
fn strip_number_prefix(word: &str) -> &str {
    for prefix in NUMBER_PREFIXES {
        if word.starts_with(prefix) && char_count(word) > char_count(prefix) + 1 {
            return &word[prefix.len()..];
        }
    }
    word
}

fn strip_case_suffix(word: &str) -> &str {
    for suffix in longest_first(CASE_SUFFIXES) {
        if word.ends_with(suffix) && char_count(word) > char_count(suffix) + 1 {
            return &word[..word.len() - suffix.len()];
        }
    }
    word
}

// Unlike the case suffixes there is no minimum-remainder guard here; the
// verb table may strip a suffix down to a very short stem.
fn strip_verb_suffix(word: &str) -> &str {
    for suffix in longest_first(VERB_SUFFIXES) {
        if word.ends_with(suffix) {
            return &word[..word.len() - suffix.len()];
        }
    }
    word
}

// Length arithmetic is in characters, not bytes: ì and ä are multi-byte.
fn char_count(s: &str) -> usize {
    s.chars().count()
}

fn longest_first(affixes: &[&'static str]) -> Vec<&'static str> {
    let mut sorted = affixes.to_vec();
    sorted.sort_by(|a, b| char_count(b).cmp(&char_count(a)));
    sorted
}
