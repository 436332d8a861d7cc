//! The irregular-form exception table consulted before any affix rule.

use crate::error::Error;
use serde_json::Value;
use std::collections::{HashMap, HashSet};

/// Maps each canonical lemma to the set of its known irregular surface
/// forms. All comparisons are case-insensitive; both lemmas and forms are
/// lowercased on the way in. A lemma always counts as one of its own
/// surface forms, whether or not it appears in its set.
///
/// The index is built once, before any lemmatization starts, and never
/// mutated afterwards, so it can be shared freely across threads.
#[derive(Clone, Debug, Default)]
pub struct ExceptionIndex {
    entries: HashMap<String, HashSet<String>>,
}

impl ExceptionIndex {
    /// An empty index: lemmatization proceeds with regular rules only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON exception table of the shape
    /// `{"lemma": ["form", ...], ...}`.
    ///
    /// A document that is not a JSON object fails with
    /// [`Error::MalformedExceptionData`]. Entries whose value is not an
    /// array of strings are rejected individually with a warning rather
    /// than failing the whole table.
    pub fn from_json_str(data: &str) -> Result<Self, Error> {
        let value: Value =
            serde_json::from_str(data).map_err(|e| Error::MalformedExceptionData(e.to_string()))?;
        let object = match value {
            Value::Object(object) => object,
            other => {
                return Err(Error::MalformedExceptionData(format!(
                    "expected a JSON object, got {}",
                    json_type_name(&other),
                )))
            }
        };

        let mut index = ExceptionIndex::new();
        for (lemma, forms) in object {
            match serde_json::from_value::<Vec<String>>(forms) {
                Ok(forms) => index.insert(&lemma, forms),
                Err(e) => {
                    tracing::warn!(lemma = %lemma, error = %e, "skipping malformed exception entry")
                }
            }
        }
        Ok(index)
    }

    /// Adds one lemma and its irregular surface forms.
    pub fn insert<I, S>(&mut self, lemma: &str, forms: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.entries.insert(
            lemma.to_lowercase(),
            forms.into_iter().map(|f| f.as_ref().to_lowercase()).collect(),
        );
    }

    /// Finds the lemma whose form set contains the given word, if any. The
    /// word must already be lowercased by the caller.
    ///
    /// When a word appears in two different lemmas' form sets, whichever
    /// entry is scanned first wins; the scan order is unspecified.
    pub fn lookup(&self, word: &str) -> Option<&str> {
        for (lemma, forms) in &self.entries {
            if forms.contains(word) || lemma == word {
                return Some(lemma);
            }
        }
        None
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Where an exception table comes from. Concrete sources (a file on disk, a
/// remote dictionary service) live outside this crate; the core only
/// consumes the loaded index.
pub trait ExceptionSource {
    fn load(&self) -> Result<ExceptionIndex, Error>;
}

#[cfg(test)]
mod tests {
    use super::ExceptionIndex;
    use crate::error::Error;

    #[test]
    fn from_json_str() {
        let index = ExceptionIndex::from_json_str(
            r#"{"oe": ["oel", "oeti", "oeru"], "nga": ["ngal", "ngati"]}"#,
        )
        .unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(index.lookup("oel"), Some("oe"));
        assert_eq!(index.lookup("ngati"), Some("nga"));
        assert_eq!(index.lookup("tute"), None);
    }

    #[test]
    fn lemma_matches_itself() {
        let mut index = ExceptionIndex::new();
        index.insert("oe", ["oel"]);
        assert_eq!(index.lookup("oe"), Some("oe"));
    }

    #[test]
    fn case_insensitive() {
        let mut index = ExceptionIndex::new();
        index.insert("Oe", ["OEL"]);
        assert_eq!(index.lookup("oel"), Some("oe"));
    }

    #[test]
    fn malformed_document() {
        for data in ["not json at all", "[1, 2, 3]", r#""just a string""#] {
            match ExceptionIndex::from_json_str(data) {
                Err(Error::MalformedExceptionData(_)) => (),
                other => panic!("expected MalformedExceptionData for {:?}, got {:?}", data, other),
            }
        }
    }

    #[test]
    fn malformed_entries_are_skipped() {
        let index = ExceptionIndex::from_json_str(
            r#"{"oe": ["oel"], "bad": 42, "worse": [1, 2], "nga": ["ngal"]}"#,
        )
        .unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(index.lookup("oel"), Some("oe"));
        assert_eq!(index.lookup("ngal"), Some("nga"));
        assert_eq!(index.lookup("bad"), None);
    }
}
