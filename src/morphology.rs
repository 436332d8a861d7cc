//! The facade over the whole engine: one entry point for analysis
//! (lemmatize) and one for synthesis (generate).
//!
//! # Examples
//!
//! ```
//! use navi_inflexion::morphology::{FeatureSet, Generated, Morphology};
//! use navi_inflexion::noun::{Case, Number, NounFeatures};
//!
//! let morphology = Morphology::new();
//! assert_eq!(morphology.lemmatize("pxetsmukan"), "tsmukan");
//!
//! let form = morphology
//!     .generate(
//!         "tsmukan",
//!         &FeatureSet::Noun(NounFeatures {
//!             case: Case::Agentive,
//!             number: Number::Plural,
//!         }),
//!     )
//!     .unwrap();
//! assert_eq!(form, Generated::Form("aysmukanil".to_string()));
//! ```

use crate::{
    adjective::{Adjective, Comparison, Position},
    error::Error,
    exceptions::{ExceptionIndex, ExceptionSource},
    lemma::Lemmatizer,
    noun::{Noun, NounFeatures, Number},
    numeral::{Numeral, NumeralForm},
    particle::{Particle, ParticleKind},
    phonology,
    prenoun::Prenoun,
    pronoun::{self, Gender, Pronoun, PronounInflection},
    term::Term,
    verb::{Infixes, Verb},
};

/// What to generate, tagged by lexical category. The category of the
/// original interface is implied by the variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeatureSet<'a> {
    /// A noun marked for number and case.
    Noun(NounFeatures),
    /// The indefinite form of a noun.
    NounIndefinite,
    /// A pronoun resolved to its honorific or gendered base, then cased.
    Pronoun(PronounInflection),
    /// The question-word paradigm: two alternative forms.
    PronounQuestion { gender: Gender, number: Number },
    /// A verb with up to three infix slots filled.
    Verb(Infixes),
    /// The attributive form of an adjective.
    Attributive {
        position: Position,
        derived_with_le: bool,
    },
    /// The adverb derived from an adjective.
    Adverb,
    /// A comparison phrase.
    Comparative(Comparison<'a>),
    /// The noun derived from a color adjective.
    ColorNoun,
    /// A numeral form for an octal digit; the lemma is ignored.
    Numeral { value: u8, form: NumeralForm },
    /// A particle placed around a context phrase.
    Particle { kind: ParticleKind, context: &'a str },
    /// A prenoun combined with a following noun.
    Prenoun { noun: &'a str },
}

/// One surface form, or the few paradigms that yield alternatives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Generated {
    Form(String),
    Forms(Vec<String>),
}

/// The bidirectional morphological engine. The exception index is fixed at
/// construction; everything else is pure computation, so a `Morphology`
/// can be shared freely across threads.
#[derive(Clone, Debug, Default)]
pub struct Morphology {
    lemmatizer: Lemmatizer,
}

impl Morphology {
    /// An engine with no exception table.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_exceptions(exceptions: ExceptionIndex) -> Self {
        Morphology {
            lemmatizer: Lemmatizer::with_exceptions(exceptions),
        }
    }

    /// Loads the exception table from a source. A source that fails is
    /// logged and replaced with an empty table; lemmatization then runs on
    /// regular rules only. This never fails.
    pub fn from_exception_source<S: ExceptionSource>(source: &S) -> Self {
        let exceptions = match source.load() {
            Ok(exceptions) => exceptions,
            Err(e) => {
                tracing::warn!(error = %e, "exception source failed, continuing with regular rules only");
                ExceptionIndex::new()
            }
        };
        Self::with_exceptions(exceptions)
    }

    pub fn lemmatizer(&self) -> &Lemmatizer {
        &self.lemmatizer
    }

    /// Reduces a surface word to its lemma. Total over any string.
    pub fn lemmatize(&self, word: &str) -> String {
        self.lemmatizer.lemmatize(word)
    }

    /// Generates the surface form(s) for a lemma and a feature set. The
    /// lemma must be a single word of the Na'vi alphabet.
    pub fn generate(&self, lemma: &str, features: &FeatureSet<'_>) -> Result<Generated, Error> {
        if !phonology::is_word(lemma) {
            return Err(Error::InvalidInput(lemma.to_string()));
        }
        tracing::debug!(lemma = %lemma, features = ?features, "generating surface form");

        let form = match features {
            FeatureSet::Noun(noun_features) => {
                Noun::new(lemma).inflect(noun_features)?.into_owned()
            }
            FeatureSet::NounIndefinite => Noun::new(lemma).indefinite(),
            FeatureSet::Pronoun(inflection) => {
                Pronoun::new(lemma).inflect(inflection)?.into_owned()
            }
            FeatureSet::PronounQuestion { gender, number } => {
                let forms = pronoun::question_forms(*gender, *number);
                return Ok(Generated::Forms(
                    forms.iter().map(|f| f.to_string()).collect(),
                ));
            }
            FeatureSet::Verb(infixes) => Verb::new(lemma).inflect(infixes)?.into_owned(),
            FeatureSet::Attributive {
                position,
                derived_with_le,
            } => {
                let mut adjective = Adjective::new(lemma);
                if *derived_with_le {
                    adjective = adjective.derived_with_le();
                }
                adjective.attributive(*position).into_owned()
            }
            FeatureSet::Adverb => Adjective::new(lemma).adverb(),
            FeatureSet::Comparative(comparison) => {
                Adjective::new(lemma).comparative(*comparison)
            }
            FeatureSet::ColorNoun => Adjective::new(lemma).color().color_noun().into_owned(),
            FeatureSet::Numeral { value, form } => Numeral::new(*value)?.form(*form).into_owned(),
            FeatureSet::Particle { kind, context } => {
                Particle::new(lemma).kind(*kind).in_context(context)
            }
            FeatureSet::Prenoun { noun } => Prenoun::new(lemma).combine(noun),
        };
        Ok(Generated::Form(form))
    }
}

#[cfg(test)]
mod tests {
    use super::{FeatureSet, Generated, Morphology};
    use crate::adjective::{Comparison, Position};
    use crate::error::Error;
    use crate::exceptions::{ExceptionIndex, ExceptionSource};
    use crate::noun::{Case, Number, NounFeatures};
    use crate::numeral::NumeralForm;
    use crate::particle::ParticleKind;
    use crate::pronoun::{Gender, PronounFeatures, PronounInflection};
    use crate::verb::{FirstInfix, Infixes};

    struct StaticSource(&'static str);

    impl ExceptionSource for StaticSource {
        fn load(&self) -> Result<ExceptionIndex, Error> {
            ExceptionIndex::from_json_str(self.0)
        }
    }

    fn form(s: &str) -> Generated {
        Generated::Form(s.to_string())
    }

    #[test]
    fn lemmatize_with_exceptions() {
        let morphology =
            Morphology::from_exception_source(&StaticSource(r#"{"oe": ["oel", "oeti"]}"#));
        assert_eq!(morphology.lemmatize("oel"), "oe");
        assert_eq!(morphology.lemmatize("kameie"), "kame");
    }

    #[test]
    fn failing_source_is_recovered() {
        let morphology = Morphology::from_exception_source(&StaticSource("not json"));
        assert!(morphology.lemmatizer().exceptions().is_empty());
        // Regular rules still apply.
        assert_eq!(morphology.lemmatize("pxetsmukan"), "tsmukan");
    }

    #[test]
    fn generate_per_category() {
        let morphology = Morphology::new();
        let noun = FeatureSet::Noun(NounFeatures {
            case: Case::Agentive,
            number: Number::Plural,
        });
        assert_eq!(morphology.generate("tsmukan", &noun).unwrap(), form("aysmukanil"));

        assert_eq!(
            morphology.generate("tute", &FeatureSet::NounIndefinite).unwrap(),
            form("tuteo"),
        );

        let pronoun = FeatureSet::Pronoun(PronounInflection {
            features: PronounFeatures::default(),
            case: Case::Genitive,
        });
        assert_eq!(morphology.generate("po", &pronoun).unwrap(), form("peyä"));

        let verb = FeatureSet::Verb(Infixes {
            first: Some(FirstInfix::ActiveParticiple),
            ..Infixes::default()
        });
        assert_eq!(morphology.generate("taron", &verb).unwrap(), form("tusaron"));

        let attributive = FeatureSet::Attributive {
            position: Position::Before,
            derived_with_le: false,
        };
        assert_eq!(morphology.generate("ean", &attributive).unwrap(), form("eana"));

        assert_eq!(
            morphology
                .generate("ftxavang", &FeatureSet::Comparative(Comparison::Superlative))
                .unwrap(),
            form("frato"),
        );

        assert_eq!(
            morphology.generate("ean", &FeatureSet::ColorNoun).unwrap(),
            form("eampin"),
        );

        let ordinal = FeatureSet::Numeral {
            value: 2,
            form: NumeralForm::Ordinal,
        };
        assert_eq!(morphology.generate("mune", &ordinal).unwrap(), form("muve"));

        let particle = FeatureSet::Particle {
            kind: ParticleKind::Question,
            context: "nga za'u",
        };
        assert_eq!(
            morphology.generate("srake", &particle).unwrap(),
            form("srake nga za'u"),
        );

        assert_eq!(
            morphology.generate("tsa", &FeatureSet::Prenoun { noun: "atan" }).unwrap(),
            form("tsatan"),
        );
    }

    #[test]
    fn question_forms_are_a_sequence() {
        let morphology = Morphology::new();
        let generated = morphology
            .generate(
                "pesu",
                &FeatureSet::PronounQuestion {
                    gender: Gender::Neutral,
                    number: Number::Plural,
                },
            )
            .unwrap();
        assert_eq!(
            generated,
            Generated::Forms(vec!["paysu".to_string(), "aysupe".to_string()]),
        );
    }

    #[test]
    fn invalid_lemma() {
        let morphology = Morphology::new();
        for lemma in ["", "oel ngati", "kame!"] {
            match morphology.generate(lemma, &FeatureSet::NounIndefinite) {
                Err(Error::InvalidInput(got)) => assert_eq!(got, lemma),
                other => panic!("expected InvalidInput for {:?}, got {:?}", lemma, other),
            }
        }
    }

    #[test]
    fn out_of_range_numeral_surfaces() {
        let morphology = Morphology::new();
        let numeral = FeatureSet::Numeral {
            value: 9,
            form: NumeralForm::Cardinal,
        };
        assert!(matches!(
            morphology.generate("vol", &numeral),
            Err(Error::UnknownFeature { .. }),
        ));
    }
}
