//! Structs for nouns.
//!
//! Nouns inflect for case and for number. Number marking prepends a dual,
//! trial, or plural prefix to a lenited stem; case marking appends a suffix
//! chosen by how the marked word ends.
//!
//! # Examples
//!
//! ```
//! use navi_inflexion::noun::{Case, Noun, Number};
//! use navi_inflexion::term::Term; // Provides the constructor
//!
//! let noun = Noun::new("tsmukan");
//! assert_eq!(noun.case(Case::Agentive), "tsmukanil");
//! assert_eq!(noun.number(Number::Plural), "aysmukan");
//! assert_eq!(noun.number_with_case(Number::Plural, Case::Agentive), "aysmukanil");
//! ```

use crate::{
    error::Error,
    phonology::{self, Profile},
    term::Term,
};
use std::borrow::Cow;

/// The six noun cases. Subjective is unmarked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Case {
    Subjective,
    Agentive,
    Patientive,
    Dative,
    Genitive,
    Topical,
}

/// Grammatical number. Everything beyond singular is marked with a prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Number {
    Singular,
    Dual,
    Trial,
    Plural,
}

impl Number {
    fn prefix(self) -> Option<&'static str> {
        match self {
            Number::Singular => None,
            Number::Dual => Some("me"),
            Number::Trial => Some("pxe"),
            Number::Plural => Some("ay"),
        }
    }
}

/// Case and number together; number is applied first, then case.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NounFeatures {
    pub case: Case,
    pub number: Number,
}

/// A `Noun` is a single noun lemma to be marked for case and number.
#[derive(Clone, Debug)]
pub struct Noun<'a>(&'a str);

impl<'a> Term<'a> for Noun<'a> {
    type Features = NounFeatures;

    fn new(noun: &'a str) -> Self {
        Self(noun)
    }

    fn lemma(&self) -> &'a str {
        self.0
    }

    fn inflect(&self, features: &NounFeatures) -> Result<Cow<'a, str>, Error> {
        Ok(self.number_with_case(features.number, features.case))
    }
}

impl<'a> Noun<'a> {
    /// Appends the case suffix selected by the lemma's own ending.
    pub fn case(&self, case: Case) -> Cow<'a, str> {
        let ending = case_ending(self.0, Profile::of(self.0), case);
        if ending.is_empty() {
            Cow::Borrowed(self.0)
        } else {
            Cow::Owned(format!("{}{}", self.0, ending))
        }
    }

    /// Prepends the number prefix to the lenited stem. Singular is the
    /// lemma itself, with no lenition.
    pub fn number(&self, number: Number) -> Cow<'a, str> {
        match number.prefix() {
            None => Cow::Borrowed(self.0),
            Some(prefix) => Cow::Owned(format!("{}{}", prefix, phonology::lenite(self.0))),
        }
    }

    /// Marks number first, then selects the case suffix from the numbered
    /// form's own ending rather than the original lemma's. Number marking
    /// can change which case rule fires.
    pub fn number_with_case(&self, number: Number, case: Case) -> Cow<'a, str> {
        let numbered = self.number(number);
        let ending = case_ending(&numbered, Profile::of(&numbered), case);
        if ending.is_empty() {
            return numbered;
        }
        Cow::Owned(format!("{}{}", numbered, ending))
    }

    /// Appends the indefinite marker "o".
    pub fn indefinite(&self) -> String {
        format!("{}o", self.0)
    }
}

pub(crate) fn case_ending(word: &str, profile: Profile, case: Case) -> &'static str {
    match case {
        Case::Subjective => "",
        Case::Agentive => {
            if profile.vowel {
                "l"
            } else {
                "il"
            }
        }
        Case::Patientive => {
            if profile.vowel || profile.diphthong {
                "ti"
            } else {
                "it"
            }
        }
        Case::Dative => {
            if profile.vowel || profile.diphthong {
                "ru"
            } else {
                "ur"
            }
        }
        Case::Genitive => {
            // Vowel-final stems in o or u take the bare suffix; any other
            // final vowel takes the glide. Consonant-final stems take the
            // bare suffix as well.
            if profile.vowel {
                if word.ends_with('o') || word.ends_with('u') {
                    "ä"
                } else {
                    "yä"
                }
            } else {
                "ä"
            }
        }
        Case::Topical => {
            if profile.vowel {
                "ri"
            } else {
                "iri"
            }
        }
    }
}
