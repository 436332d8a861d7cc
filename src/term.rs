//! Provides the [Term] trait, which defines the inflection capability
//! shared by all word structs.

use crate::error::Error;
use std::borrow::Cow;

/// This trait is implemented by all word classes, such as nouns, verbs,
/// etc. Each class declares its own feature type and produces one surface
/// form per feature set.
pub trait Term<'a>: Sized {
    /// The grammatical features this word class inflects over.
    type Features;

    /// Creates a new term from a lemma. Note that nothing in the code
    /// actually ensures the lemma belongs to this word class; classifying
    /// Na'vi is well beyond the remit of this crate.
    fn new(lemma: &'a str) -> Self;

    /// Returns the lemma this term was created from.
    fn lemma(&self) -> &'a str;

    /// Returns the surface form for the given features. Whenever the
    /// inflected form is the lemma itself (unmarked case, singular number),
    /// this avoids allocating a new [String](std::string::String).
    ///
    /// Fails only when the features fall outside the class's closed
    /// paradigm; every well-formed feature set yields a form.
    fn inflect(&self, features: &Self::Features) -> Result<Cow<'a, str>, Error>;
}
