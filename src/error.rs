//! The crate-wide error type.

use thiserror::Error;

/// Errors reported by the morphology engine.
///
/// Anything not listed here is a normal outcome, not an error: a word that
/// is absent from the exception table, a word no affix rule matches, or a
/// stem that comes out empty after stripping are all valid results.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The given string is not Na'vi word text (empty, or containing
    /// characters outside the Na'vi alphabet).
    #[error("invalid input: {0:?} is not a Na'vi word")]
    InvalidInput(String),

    /// The exception table could not be parsed at all. Callers loading a
    /// table through [`Morphology::from_exception_source`](crate::morphology::Morphology::from_exception_source)
    /// recover from this by continuing with regular rules only.
    #[error("malformed exception data: {0}")]
    MalformedExceptionData(String),

    /// A generator was asked for a form outside its closed paradigm, for
    /// example a numeral beyond the octal digits or a pronoun combination
    /// that has no base form.
    #[error("no {category} form for {detail}")]
    UnknownFeature {
        category: &'static str,
        detail: String,
    },
}

impl Error {
    pub(crate) fn unknown_feature(category: &'static str, detail: impl Into<String>) -> Self {
        Error::UnknownFeature {
            category,
            detail: detail.into(),
        }
    }
}
