//! The dictionary-lookup boundary.
//!
//! The core never fetches a word list itself; a surrounding pipeline
//! implements [LexiconLookup] over whatever source it has (a tabular file,
//! a remote dictionary service) and hands back typed records.

use serde::Deserialize;

/// One dictionary entry. The surface form and part of speech are required;
/// everything else defaults to empty when the source omits it.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct LexicalRecord {
    #[serde(rename = "navi")]
    pub surface: String,
    #[serde(default)]
    pub syllabic: String,
    #[serde(default)]
    pub acoustic: String,
    #[serde(rename = "pos", alias = "wordclass")]
    pub part_of_speech: String,
    #[serde(default)]
    pub translations: Vec<String>,
}

/// Looks a lemma up in a dictionary. Absence is a valid outcome (an
/// unknown word), not an error.
pub trait LexiconLookup {
    fn lookup(&self, lemma: &str) -> Option<LexicalRecord>;
}

#[cfg(test)]
mod tests {
    use super::LexicalRecord;

    #[test]
    fn deserializes_both_key_spellings() {
        let record: LexicalRecord = serde_json::from_str(
            r#"{"navi": "kame", "pos": "verb", "translations": ["to see"]}"#,
        )
        .unwrap();
        assert_eq!(record.surface, "kame");
        assert_eq!(record.part_of_speech, "verb");
        assert_eq!(record.translations, ["to see"]);
        assert_eq!(record.syllabic, "");

        let record: LexicalRecord = serde_json::from_str(
            r#"{"navi": "oe", "wordclass": "pronoun", "syllabic": "o-e"}"#,
        )
        .unwrap();
        assert_eq!(record.part_of_speech, "pronoun");
        assert_eq!(record.syllabic, "o-e");
        assert!(record.translations.is_empty());
    }

    #[test]
    fn required_fields() {
        // Missing surface form.
        assert!(serde_json::from_str::<LexicalRecord>(r#"{"pos": "verb"}"#).is_err());
        // Missing part of speech.
        assert!(serde_json::from_str::<LexicalRecord>(r#"{"navi": "kame"}"#).is_err());
    }
}
