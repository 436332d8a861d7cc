// #![deny(missing_docs)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::broken_intra_doc_links)]

//! Lemmatize and inflect Na'vi nouns, pronouns, verbs, adjectives, and
//! numerals.
//!
//! This crate is a bidirectional morphological engine for the constructed
//! language Na'vi. The analysis direction reduces an inflected surface
//! word to its dictionary lemma by consulting an exception table of
//! irregular forms and then stripping at most one number prefix, one case
//! suffix, and one verb suffix. The synthesis direction generates surface
//! forms from a lemma and a grammatical feature set, one generator per
//! lexical category: noun case and number, pronoun paradigms and their
//! irregulars, verb infixation, adjective attribution and comparison,
//! octal numerals, particle placement, and prenoun combination.
//!
//! All rules are hand-specified tables applied deterministically; there is
//! no statistics and no learning. Every operation is a pure function over
//! immutable tables built once at construction, so the engine can be
//! shared freely across threads.
//!
//! The engine works on single words. Tokenizing sentences, looking lemmas
//! up in a dictionary, and exporting results are the concern of a
//! surrounding pipeline, which this crate meets at the
//! [ExceptionSource](exceptions::ExceptionSource) and
//! [LexiconLookup](lexicon::LexiconLookup) boundaries.
//!
//! # Examples
//!
//! ```
//! use navi_inflexion::morphology::{FeatureSet, Generated, Morphology};
//! use navi_inflexion::noun::{Case, Number, NounFeatures};
//!
//! let morphology = Morphology::new();
//!
//! // Analysis: surface word to lemma.
//! assert_eq!(morphology.lemmatize("pxetsmukan"), "tsmukan");
//!
//! // Synthesis: lemma plus features to surface form.
//! let features = FeatureSet::Noun(NounFeatures {
//!     case: Case::Agentive,
//!     number: Number::Plural,
//! });
//! let form = morphology.generate("tsmukan", &features).unwrap();
//! assert_eq!(form, Generated::Form("aysmukanil".to_string()));
//! ```

pub mod adjective;
pub mod error;
pub mod exceptions;
pub mod lemma;
pub mod lexicon;
pub mod morphology;
pub mod noun;
pub mod numeral;
pub mod particle;
pub mod phonology;
pub mod prenoun;
pub mod pronoun;
pub mod term;
pub mod verb;
