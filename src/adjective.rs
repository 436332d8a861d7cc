//! Structs for adjectives.
//!
//! Adjectives take the attributive marker "a" when modifying a noun,
//! derive adverbs with "ni", compare with fixed templates, and (for the
//! color words) derive nouns with "pin".

use crate::{error::Error, term::Term};
use std::borrow::Cow;

/// Where the adjective stands relative to the noun it modifies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Position {
    Before,
    After,
}

/// The comparison templates. The standard of comparison, where one is
/// given, is interpolated verbatim.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Comparison<'a> {
    Standard(Option<&'a str>),
    Superlative,
    Equality(&'a str),
}

/// The attributive form for a position, for the [Term] interface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdjectiveFeatures {
    pub position: Position,
}

/// An `Adjective` is a single adjective lemma. Two closed lexical
/// properties change its behavior: "le"-derived adjectives stay unmarked
/// after the noun, and color adjectives can derive a noun.
#[derive(Clone, Debug)]
pub struct Adjective<'a> {
    lemma: &'a str,
    derived_with_le: bool,
    is_color: bool,
}

impl<'a> Term<'a> for Adjective<'a> {
    type Features = AdjectiveFeatures;

    fn new(adjective: &'a str) -> Self {
        Adjective {
            lemma: adjective,
            derived_with_le: false,
            is_color: false,
        }
    }

    fn lemma(&self) -> &'a str {
        self.lemma
    }

    fn inflect(&self, features: &AdjectiveFeatures) -> Result<Cow<'a, str>, Error> {
        Ok(self.attributive(features.position))
    }
}

impl<'a> Adjective<'a> {
    /// Marks the adjective as derived with the "le" prefix.
    pub fn derived_with_le(mut self) -> Self {
        self.derived_with_le = true;
        self
    }

    /// Marks the adjective as a color word.
    pub fn color(mut self) -> Self {
        self.is_color = true;
        self
    }

    /// The attributive form: the lemma plus "a", except that a lemma
    /// already ending in "a" stays as it is, and a "le"-derived adjective
    /// after the noun stays unmarked.
    pub fn attributive(&self, position: Position) -> Cow<'a, str> {
        if self.derived_with_le && position == Position::After {
            return Cow::Borrowed(self.lemma);
        }
        if self.lemma.ends_with('a') {
            return Cow::Borrowed(self.lemma);
        }
        Cow::Owned(format!("{}a", self.lemma))
    }

    /// The derived adverb: "ni" plus the lemma.
    pub fn adverb(&self) -> String {
        format!("ni{}", self.lemma)
    }

    /// A comparison phrase. The superlative is the invariant "frato".
    pub fn comparative(&self, comparison: Comparison<'_>) -> String {
        match comparison {
            Comparison::Standard(Some(compared_to)) => format!("to {}", compared_to),
            Comparison::Standard(None) => "to".to_string(),
            Comparison::Superlative => "frato".to_string(),
            Comparison::Equality(compared_to) => {
                format!("niftxan {} na {}", self.lemma, compared_to)
            }
        }
    }

    /// The noun derived from a color adjective with "pin". A lemma ending
    /// in "n" assimilates to "mpin". Non-color adjectives are returned
    /// unchanged.
    pub fn color_noun(&self) -> Cow<'a, str> {
        if !self.is_color {
            return Cow::Borrowed(self.lemma);
        }
        if self.lemma.ends_with('n') {
            return Cow::Owned(format!("{}mpin", &self.lemma[..self.lemma.len() - 1]));
        }
        Cow::Owned(format!("{}pin", self.lemma))
    }
}

#[cfg(test)]
mod tests {
    use super::{Adjective, Comparison, Position};
    use crate::term::Term;

    #[test]
    fn attributive() {
        // Already a-final: idempotent.
        assert_eq!(Adjective::new("apxa").attributive(Position::Before), "apxa");
        assert_eq!(Adjective::new("ean").attributive(Position::Before), "eana");
        assert_eq!(Adjective::new("ean").attributive(Position::After), "eana");

        // "le"-derived adjectives stay unmarked after the noun only.
        let adjective = Adjective::new("lehrrap").derived_with_le();
        assert_eq!(adjective.attributive(Position::After), "lehrrap");
        assert_eq!(adjective.attributive(Position::Before), "lehrrapa");
    }

    #[test]
    fn adverb() {
        assert_eq!(Adjective::new("ftue").adverb(), "niftue");
        assert_eq!(Adjective::new("ean").adverb(), "niean");
    }

    #[test]
    fn comparative() {
        let adjective = Adjective::new("ftxavang");
        assert_eq!(adjective.comparative(Comparison::Standard(Some("nga"))), "to nga");
        assert_eq!(adjective.comparative(Comparison::Standard(None)), "to");
        assert_eq!(adjective.comparative(Comparison::Superlative), "frato");
        assert_eq!(
            adjective.comparative(Comparison::Equality("nga")),
            "niftxan ftxavang na nga",
        );
    }

    #[test]
    fn color_noun() {
        // Nasal assimilation on n-final colors.
        assert_eq!(Adjective::new("ean").color().color_noun(), "eampin");
        assert_eq!(Adjective::new("rim").color().color_noun(), "rimpin");
        assert_eq!(Adjective::new("tun").color().color_noun(), "tumpin");
        // Not a color: unchanged.
        assert_eq!(Adjective::new("ean").color_noun(), "ean");
    }
}
