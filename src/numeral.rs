//! Numerals in the octal counting system.
//!
//! Only the eight octal digits have dedicated words; larger numbers are
//! composed outside this crate. A value outside 1 through 8 is an error,
//! never a silent fallback.

use crate::error::Error;
use std::borrow::Cow;

/// The derived numeral forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumeralForm {
    Cardinal,
    Ordinal,
    Fraction,
    Adverbial,
}

/// A `Numeral` is one octal digit, 1 through 8.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Numeral(u8);

impl Numeral {
    /// Creates a numeral, rejecting values outside the octal digits.
    pub fn new(value: u8) -> Result<Self, Error> {
        if !(1..=8).contains(&value) {
            return Err(Error::unknown_feature(
                "numeral",
                format!("value {} outside the octal digits 1-8", value),
            ));
        }
        Ok(Numeral(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn form(self, form: NumeralForm) -> Cow<'static, str> {
        match form {
            NumeralForm::Cardinal => Cow::Borrowed(self.cardinal()),
            NumeralForm::Ordinal => Cow::Owned(self.ordinal()),
            NumeralForm::Fraction => Cow::Owned(self.fraction()),
            NumeralForm::Adverbial => Cow::Owned(self.adverbial()),
        }
    }

    /// The counting word.
    pub fn cardinal(self) -> &'static str {
        match self.0 {
            1 => "'aw",
            2 => "mune",
            3 => "pxey",
            4 => "tsing",
            5 => "mrr",
            6 => "pukap",
            7 => "kinä",
            8 => "vol",
            _ => unreachable!("constructor rejects values outside 1-8"),
        }
    }

    /// The ordinal: a per-cardinal stem plus "ve". Most stems equal the
    /// cardinal; the rest are truncated.
    pub fn ordinal(self) -> String {
        format!("{}ve", self.ordinal_stem())
    }

    fn ordinal_stem(self) -> &'static str {
        match self.0 {
            2 => "mu",
            4 => "tsi",
            6 => "pu",
            7 => "ki",
            _ => self.cardinal(),
        }
    }

    /// The fraction: two irregular forms, otherwise the ordinal stem plus
    /// "pxi".
    pub fn fraction(self) -> String {
        match self.0 {
            2 => "mawl".to_string(),
            3 => "pan".to_string(),
            _ => format!("{}pxi", self.ordinal_stem()),
        }
    }

    /// The adverbial (count of occurrences): irregular for 1 through 3,
    /// productive "alo a" plus the cardinal from 4 up.
    pub fn adverbial(self) -> String {
        match self.0 {
            1 => "'awlo".to_string(),
            2 => "melo".to_string(),
            3 => "pxelo".to_string(),
            _ => format!("alo a{}", self.cardinal()),
        }
    }
}
