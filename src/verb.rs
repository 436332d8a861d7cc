//! Structs for verbs.
//!
//! Verbs inflect by infixation: a morpheme is inserted inside the stem
//! rather than at its edges. There are three slots, filled in order on the
//! same surface word: the pre-first and first slots sit two syllables from
//! the end, the second slot in the last syllable. Each slot admits a closed
//! set of infixes.
//!
//! # Examples
//!
//! ```
//! use navi_inflexion::term::Term; // Provides the constructor
//! use navi_inflexion::verb::Verb;
//!
//! let verb = Verb::new("taron");
//! assert_eq!(verb.active_participle(), "tusaron");
//! assert_eq!(verb.causative(), "teykaron");
//! ```

use crate::{error::Error, phonology, term::Term};
use std::borrow::Cow;

/// The pre-first slot: valence changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreFirstInfix {
    /// "eyk"
    Causative,
    /// "äp"
    Reflexive,
}

impl PreFirstInfix {
    pub fn as_str(self) -> &'static str {
        match self {
            PreFirstInfix::Causative => "eyk",
            PreFirstInfix::Reflexive => "äp",
        }
    }
}

/// The first slot: tense, aspect, mood, and participles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FirstInfix {
    /// "iv"
    Subjunctive,
    /// "er"
    Imperfective,
    /// "ol"
    Perfective,
    /// "us"
    ActiveParticiple,
    /// "awn"
    PassiveParticiple,
}

impl FirstInfix {
    pub fn as_str(self) -> &'static str {
        match self {
            FirstInfix::Subjunctive => "iv",
            FirstInfix::Imperfective => "er",
            FirstInfix::Perfective => "ol",
            FirstInfix::ActiveParticiple => "us",
            FirstInfix::PassiveParticiple => "awn",
        }
    }
}

/// The second slot: affect and evidentiality.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SecondInfix {
    /// "ei", positive affect
    Positive,
    /// "äng", negative affect
    Negative,
    /// "ats", inferential
    Inferential,
}

impl SecondInfix {
    pub fn as_str(self) -> &'static str {
        match self {
            SecondInfix::Positive => "ei",
            SecondInfix::Negative => "äng",
            SecondInfix::Inferential => "ats",
        }
    }
}

/// Up to one infix per slot, applied pre-first, first, second.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Infixes {
    pub pre_first: Option<PreFirstInfix>,
    pub first: Option<FirstInfix>,
    pub second: Option<SecondInfix>,
}

/// A `Verb` is a single verb lemma to be inflected by infixation.
#[derive(Clone, Debug)]
pub struct Verb<'a>(&'a str);

impl<'a> Term<'a> for Verb<'a> {
    type Features = Infixes;

    fn new(verb: &'a str) -> Self {
        Self(verb)
    }

    fn lemma(&self) -> &'a str {
        self.0
    }

    fn inflect(&self, infixes: &Infixes) -> Result<Cow<'a, str>, Error> {
        Ok(self.with_infixes(infixes))
    }
}

impl<'a> Verb<'a> {
    /// Fills the three infix slots in order, mutating the same surface
    /// word: the pre-first infix goes two syllables from the end (only on
    /// verbs of at least two syllables), the first infix two syllables
    /// from the end of the word as it now stands, the second infix in the
    /// last syllable. Out-of-range positions clamp to the nearest end.
    pub fn with_infixes(&self, infixes: &Infixes) -> Cow<'a, str> {
        if infixes.pre_first.is_none() && infixes.first.is_none() && infixes.second.is_none() {
            return Cow::Borrowed(self.0);
        }

        let mut result = self.0.to_string();
        if let Some(pre_first) = infixes.pre_first {
            if phonology::syllables(self.0).len() >= 2 {
                result = phonology::insert_infix(&result, pre_first.as_str(), -2);
            }
        }
        if let Some(first) = infixes.first {
            result = phonology::insert_infix(&result, first.as_str(), -2);
        }
        if let Some(second) = infixes.second {
            result = phonology::insert_infix(&result, second.as_str(), -1);
        }
        Cow::Owned(result)
    }

    /// The active participle, with "us" in the first slot.
    pub fn active_participle(&self) -> Cow<'a, str> {
        self.with_infixes(&Infixes {
            first: Some(FirstInfix::ActiveParticiple),
            ..Infixes::default()
        })
    }

    /// The passive participle, with "awn" in the first slot.
    pub fn passive_participle(&self) -> Cow<'a, str> {
        self.with_infixes(&Infixes {
            first: Some(FirstInfix::PassiveParticiple),
            ..Infixes::default()
        })
    }

    /// The causative, with "eyk" in the pre-first slot.
    pub fn causative(&self) -> Cow<'a, str> {
        self.with_infixes(&Infixes {
            pre_first: Some(PreFirstInfix::Causative),
            ..Infixes::default()
        })
    }

    /// The reflexive, with "äp" in the pre-first slot.
    pub fn reflexive(&self) -> Cow<'a, str> {
        self.with_infixes(&Infixes {
            pre_first: Some(PreFirstInfix::Reflexive),
            ..Infixes::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{FirstInfix, Infixes, PreFirstInfix, SecondInfix, Verb};
    use crate::term::Term;

    #[test]
    fn single_slots() {
        let verb = Verb::new("taron");
        assert_eq!(verb.active_participle(), "tusaron");
        assert_eq!(verb.passive_participle(), "tawnaron");
        assert_eq!(verb.causative(), "teykaron");
        assert_eq!(verb.reflexive(), "täparon");

        let verb = Verb::new("kame");
        assert_eq!(
            verb.with_infixes(&Infixes {
                second: Some(SecondInfix::Positive),
                ..Infixes::default()
            }),
            "kameie",
        );
    }

    #[test]
    fn slots_compose_in_order() {
        // Pre-first first, then the first infix lands two syllables from
        // the end of the already-mutated word.
        let form = Verb::new("taron").with_infixes(&Infixes {
            pre_first: Some(PreFirstInfix::Causative),
            first: Some(FirstInfix::ActiveParticiple),
            second: None,
        });
        assert_eq!(form, "teykusaron");

        let form = Verb::new("taron").with_infixes(&Infixes {
            pre_first: None,
            first: Some(FirstInfix::Imperfective),
            second: Some(SecondInfix::Positive),
        });
        assert_eq!(form, "terareion");
    }

    #[test]
    fn short_verbs() {
        // The pre-first slot needs at least two syllables.
        assert_eq!(Verb::new("si").causative(), "si");
        // The first slot clamps to the only syllable.
        assert_eq!(
            Verb::new("si").with_infixes(&Infixes {
                first: Some(FirstInfix::Subjunctive),
                ..Infixes::default()
            }),
            "sivi",
        );
    }

    #[test]
    fn degenerate_words_do_not_panic() {
        let verb = Verb::new("krr");
        assert_eq!(verb.active_participle(), "krr");
        assert_eq!(Verb::new("").active_participle(), "");
    }

    #[test]
    fn no_infixes_is_identity() {
        let verb = Verb::new("taron");
        assert_eq!(verb.with_infixes(&Infixes::default()), "taron");
        assert_eq!(verb.inflect(&Infixes::default()).unwrap(), "taron");
    }
}
