//! Structs for pronouns.
//!
//! Pronouns take the same case suffixes as nouns, selected by the
//! pronoun's own ending, but a closed set of them has irregular genitives,
//! honorific forms, and gendered third-person forms on top of the regular
//! rules. The question word ("who") and the lexeme "lahe" carry whole
//! paradigms of their own, kept here as static data.
//!
//! # Examples
//!
//! ```
//! use navi_inflexion::noun::Case;
//! use navi_inflexion::pronoun::Pronoun;
//! use navi_inflexion::term::Term; // Provides the constructor
//!
//! let pronoun = Pronoun::new("nga");
//! assert_eq!(pronoun.case(Case::Patientive), "ngati");
//! assert_eq!(pronoun.genitive(), "ngeyä");
//! ```

use crate::{
    error::Error,
    noun::{self, Case, Noun, Number},
    phonology::{self, Profile},
    term::Term,
};
use once_cell::sync::Lazy;
use std::{borrow::Cow, collections::HashMap};

/// Grammatical person.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Person {
    First,
    Second,
    Third,
}

/// Animate versus inanimate, distinguished only in the third person.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Animacy {
    Animate,
    Inanimate,
}

/// Whether a first-person non-singular pronoun includes the addressee.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Inclusivity {
    Inclusive,
    Exclusive,
}

/// Gender, marked only on third-person singular animate forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Gender {
    Neutral,
    Male,
    Female,
}

/// The full feature bundle a pronoun inflects over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PronounFeatures {
    pub person: Person,
    pub number: Number,
    pub animacy: Animacy,
    pub inclusivity: Inclusivity,
    pub gender: Gender,
    pub honorific: bool,
}

impl Default for PronounFeatures {
    fn default() -> Self {
        PronounFeatures {
            person: Person::Third,
            number: Number::Singular,
            animacy: Animacy::Animate,
            inclusivity: Inclusivity::Exclusive,
            gender: Gender::Neutral,
            honorific: false,
        }
    }
}

impl PronounFeatures {
    fn is_third_singular_animate(&self) -> bool {
        self.person == Person::Third
            && self.number == Number::Singular
            && self.animacy == Animacy::Animate
    }
}

/// Features plus a case, for the [Term] interface. The honorific or
/// gendered base form is resolved first, then the case suffix is applied
/// to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PronounInflection {
    pub features: PronounFeatures,
    pub case: Case,
}

/// A `Pronoun` is a single pronoun lemma.
#[derive(Clone, Debug)]
pub struct Pronoun<'a>(&'a str);

impl<'a> Term<'a> for Pronoun<'a> {
    type Features = PronounInflection;

    fn new(pronoun: &'a str) -> Self {
        Self(pronoun)
    }

    fn lemma(&self) -> &'a str {
        self.0
    }

    fn inflect(&self, inflection: &PronounInflection) -> Result<Cow<'a, str>, Error> {
        let features = &inflection.features;
        let base: Cow<'a, str> = if features.honorific {
            self.honorific(features)
        } else if features.gender != Gender::Neutral {
            self.gendered(features)
        } else {
            Cow::Borrowed(self.0)
        };

        let inflected = match inflection.case {
            Case::Subjective => return Ok(base),
            Case::Genitive => genitive_of(&base).into_owned(),
            case => {
                let ending = noun::case_ending(&base, Profile::of(&base), case);
                format!("{}{}", base, ending)
            }
        };
        Ok(Cow::Owned(inflected))
    }
}

impl<'a> Pronoun<'a> {
    /// Applies the regular noun case rules, selected by the pronoun's own
    /// ending. The genitive produced here is the regular one; see
    /// [genitive](Self::genitive) for the irregular forms.
    pub fn case(&self, case: Case) -> Cow<'a, str> {
        Noun::new(self.0).case(case)
    }

    /// The genitive, with irregular forms taking precedence over the
    /// regular "ä" suffix. Derived pronouns ending in "po" (frapo, 'awpo,
    /// lapo, fìpo, tsapo, ...) replace the trailing "po" with "peyä".
    pub fn genitive(&self) -> Cow<'a, str> {
        genitive_of(self.0)
    }

    /// The honorific (ceremonial) form. Third-person singular animate
    /// pronouns with a gender take "pohan" or "pohe" ahead of the lookup
    /// table; pronouns with no honorific form are returned unchanged.
    pub fn honorific(&self, features: &PronounFeatures) -> Cow<'a, str> {
        if features.is_third_singular_animate() {
            match features.gender {
                Gender::Male => return Cow::Borrowed("pohan"),
                Gender::Female => return Cow::Borrowed("pohe"),
                Gender::Neutral => (),
            }
        }
        match HONORIFICS.get(self.0) {
            Some(form) => Cow::Borrowed(*form),
            None => Cow::Borrowed(self.0),
        }
    }

    /// The gendered base form. Only third-person singular animate pronouns
    /// have one ("poan" male, "poe" female); everything else is returned
    /// unchanged.
    pub fn gendered(&self, features: &PronounFeatures) -> Cow<'a, str> {
        if features.is_third_singular_animate() {
            match features.gender {
                Gender::Male => return Cow::Borrowed("poan"),
                Gender::Female => return Cow::Borrowed("poe"),
                Gender::Neutral => (),
            }
        }
        Cow::Borrowed(self.0)
    }

    /// The short plural: "ay" plus the lemma, with lenition for the two
    /// irregular bases "po" and "fo".
    pub fn short_plural(&self) -> String {
        if self.0 == "po" || self.0 == "fo" {
            return format!("ay{}", phonology::lenite(self.0));
        }
        format!("ay{}", self.0)
    }

    /// The conventional short form of the handful of plurals that have
    /// one, or `None`.
    pub fn short_form(&self) -> Option<&'static str> {
        SHORT_FORMS.get(self.0).copied()
    }

    pub fn has_short_form(&self) -> bool {
        SHORT_FORMS.contains_key(self.0)
    }
}

fn genitive_of(word: &str) -> Cow<'_, str> {
    const PO_PREFIXES: &[&str] = &["fra", "'aw", "la", "fì", "tsa"];
    if word.ends_with("po") && PO_PREFIXES.iter().any(|p| word.starts_with(p)) {
        return Cow::Owned(format!("{}peyä", &word[..word.len() - 2]));
    }
    match IRREGULAR_GENITIVES.get(word) {
        Some(form) => Cow::Borrowed(*form),
        None => Cow::Owned(format!("{}ä", word)),
    }
}

/// The reflexive pronoun (himself, herself, itself, oneself).
pub const REFLEXIVE: &str = "sno";

/// The indeterminate pronoun (one, an unspecified agent).
pub const INDETERMINATE: &str = "fko";

/// The base form for a feature bundle. Combinations outside the paradigm,
/// such as a first-person inclusive singular, are errors rather than
/// silent fallbacks.
pub fn base_form(features: &PronounFeatures) -> Result<&'static str, Error> {
    let form = match features.person {
        Person::First => match (features.inclusivity, features.number) {
            (Inclusivity::Exclusive, Number::Singular) => "oe",
            (Inclusivity::Exclusive, Number::Dual) => "moe",
            (Inclusivity::Exclusive, Number::Trial) => "pxoe",
            (Inclusivity::Exclusive, Number::Plural) => "ayoe",
            // There is no inclusive singular: including the addressee
            // already makes two.
            (Inclusivity::Inclusive, Number::Singular) => {
                return Err(Error::unknown_feature(
                    "pronoun",
                    "first person inclusive singular",
                ))
            }
            (Inclusivity::Inclusive, Number::Dual) => "oeng",
            (Inclusivity::Inclusive, Number::Trial) => "pxoeng",
            (Inclusivity::Inclusive, Number::Plural) => "ayoeng",
        },
        Person::Second => match features.number {
            Number::Singular => "nga",
            Number::Dual => "menga",
            Number::Trial => "pxenga",
            Number::Plural => "aynga",
        },
        Person::Third => match (features.animacy, features.number) {
            (Animacy::Animate, Number::Singular) => "po",
            (Animacy::Animate, Number::Dual) => "mefo",
            (Animacy::Animate, Number::Trial) => "pxefo",
            (Animacy::Animate, Number::Plural) => "ayfo",
            (Animacy::Inanimate, Number::Singular) => "tsa'u",
            (Animacy::Inanimate, Number::Dual) => "mesa'u",
            (Animacy::Inanimate, Number::Trial) => "pxesa'u",
            (Animacy::Inanimate, Number::Plural) => "aysa'u",
        },
    };
    Ok(form)
}

/// The two alternative surface forms (long and short order) of the
/// question word "who", by gender and number.
pub fn question_forms(gender: Gender, number: Number) -> [&'static str; 2] {
    match (gender, number) {
        (Gender::Neutral, Number::Singular) => ["pesu", "tupe"],
        (Gender::Neutral, Number::Dual) => ["pemsu", "mesupe"],
        (Gender::Neutral, Number::Trial) => ["pepxsu", "pxesupe"],
        (Gender::Neutral, Number::Plural) => ["paysu", "aysupe"],
        (Gender::Male, Number::Singular) => ["pestan", "tutampe"],
        (Gender::Male, Number::Dual) => ["pemstan", "mestampe"],
        (Gender::Male, Number::Trial) => ["pepxstan", "pxestampe"],
        (Gender::Male, Number::Plural) => ["paystan", "aystampe"],
        (Gender::Female, Number::Singular) => ["peste", "tutepe"],
        (Gender::Female, Number::Dual) => ["pemste", "mestepe"],
        (Gender::Female, Number::Trial) => ["pepxste", "pxestepe"],
        (Gender::Female, Number::Plural) => ["payste", "aystepe"],
    }
}

/// Register of the fixed "lahe" (other) paradigm.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Register {
    Full,
    Short,
}

/// The fixed paradigm of "lahe": six cases in two registers. The short
/// genitive has an irregular vowel change.
pub fn lahe_form(register: Register, case: Case) -> &'static str {
    match (register, case) {
        (Register::Full, Case::Subjective) => "aylahe",
        (Register::Full, Case::Agentive) => "aylahel",
        (Register::Full, Case::Patientive) => "aylaheti",
        (Register::Full, Case::Dative) => "aylaheru",
        (Register::Full, Case::Genitive) => "aylaheyä",
        (Register::Full, Case::Topical) => "aylaheri",
        (Register::Short, Case::Subjective) => "ayla",
        (Register::Short, Case::Agentive) => "aylal",
        (Register::Short, Case::Patientive) => "aylat",
        (Register::Short, Case::Dative) => "aylar",
        (Register::Short, Case::Genitive) => "ayleyä",
        (Register::Short, Case::Topical) => "aylari",
    }
}

static IRREGULAR_GENITIVES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut genitives = HashMap::new();
    genitives.insert("fko", "fkeyä");
    genitives.insert("nga", "ngeyä");
    genitives.insert("po", "peyä");
    genitives.insert("sno", "sneyä");
    genitives.insert("tsa'u", "tseyä");
    genitives.insert("ayla", "ayleyä");
    genitives.insert("fo", "feyä");
    genitives.insert("awnga", "awngeyä");
    genitives.insert("ayoeng", "ayoengeyä");
    genitives.insert("oe", "oeyä");
    genitives.insert("moe", "moeyä");
    genitives.insert("pxoe", "pxoeyä");
    genitives.insert("ayoe", "ayoeyä");
    genitives.insert("oeng", "oengeyä");
    genitives.insert("pxoeng", "pxoengeyä");
    genitives
});

static HONORIFICS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut honorifics = HashMap::new();
    // First person exclusive.
    honorifics.insert("oe", "ohe");
    honorifics.insert("moe", "mohe");
    honorifics.insert("pxoe", "pxohe");
    honorifics.insert("ayoe", "ayohe");
    // First person inclusive.
    honorifics.insert("oeng", "oheng");
    honorifics.insert("pxoeng", "pxoheng");
    honorifics.insert("ayoeng", "ayoheng");
    // Second person.
    honorifics.insert("nga", "ngenga");
    honorifics.insert("menga", "mengenga");
    honorifics.insert("pxenga", "pxengenga");
    honorifics.insert("aynga", "ayngenga");
    // Third person animate.
    honorifics.insert("po", "poho");
    honorifics
});

static SHORT_FORMS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut short_forms = HashMap::new();
    short_forms.insert("ayoeng", "awnga");
    short_forms.insert("ayfo", "fo");
    short_forms.insert("aysa'u", "sa'u");
    short_forms
});
