//! Structs for prenouns, the adjective-like noun prefixes.

use crate::{error::Error, term::Term};
use std::borrow::Cow;

// The closed set of lenition-triggering prenoun onsets.
const LENITING_PRENOUNS: &[&str] = &["pe"];

/// A `Prenoun` is a prefix that combines directly with a following noun.
#[derive(Clone, Debug)]
pub struct Prenoun<'a>(&'a str);

impl<'a> Term<'a> for Prenoun<'a> {
    type Features = &'a str;

    fn new(prenoun: &'a str) -> Self {
        Self(prenoun)
    }

    fn lemma(&self) -> &'a str {
        self.0
    }

    fn inflect(&self, noun: &&'a str) -> Result<Cow<'a, str>, Error> {
        Ok(Cow::Owned(self.combine(noun)))
    }
}

impl<'a> Prenoun<'a> {
    /// Joins the prenoun to a noun, contracting a trailing "a" against the
    /// noun's leading "a": tsa + atan is tsatan, not tsaatan.
    pub fn combine(&self, noun: &str) -> String {
        if self.0.ends_with('a') && noun.starts_with('a') {
            return format!("{}{}", &self.0[..self.0.len() - 1], noun);
        }
        format!("{}{}", self.0, noun)
    }

    /// Whether this prenoun triggers lenition on the noun it attaches to.
    pub fn causes_lenition(&self) -> bool {
        LENITING_PRENOUNS.iter().any(|p| self.0.starts_with(p))
    }
}

#[cfg(test)]
mod tests {
    use super::Prenoun;
    use crate::term::Term;

    #[test]
    fn combine() {
        let tests = [
            // Vowel contraction.
            ("tsa", "atan", "tsatan"),
            ("fra", "atan", "fratan"),
            // No contraction.
            ("fì", "kelku", "fìkelku"),
            ("tsa", "kelku", "tsakelku"),
        ];
        for test in tests {
            assert_eq!(
                Prenoun::new(test.0).combine(test.1),
                test.2,
                "combine({}, {}) = {}",
                test.0,
                test.1,
                test.2,
            );
        }
    }

    #[test]
    fn causes_lenition() {
        assert!(Prenoun::new("pe").causes_lenition());
        assert!(Prenoun::new("pem").causes_lenition());
        assert!(!Prenoun::new("fra").causes_lenition());
        assert!(!Prenoun::new("tsa").causes_lenition());
    }
}
