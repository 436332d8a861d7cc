//! Shared phonological helpers.
//!
//! Everything that more than one word class needs lives here: the vowel,
//! diphthong, and pseudovowel alphabets, ending profiles for suffix
//! selection, the lenition table, and syllable handling for verb infixes.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

/// The Na'vi vowels. The diphthongs and pseudovowels below behave like
/// vowels for some suffix-selection rules but never end a syllable scan.
pub const VOWELS: &[char] = &['a', 'e', 'i', 'ì', 'o', 'u', 'ä'];

const DIPHTHONGS: &[&str] = &["aw", "ay", "ew", "ey"];

const PSEUDOVOWELS: &[&str] = &["ll", "rr"];

// Longest-first, so "px" is never read as "p". The plain stops map to
// themselves in this dialect of the table.
const LENITION: &[(&str, &str)] = &[
    ("px", "p"),
    ("tx", "t"),
    ("kx", "k"),
    ("ts", "s"),
    ("p", "p"),
    ("t", "t"),
    ("k", "k"),
];

static WORD_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-ZàèìòùÀÈÌÒÙäëïöüÄËÏÖÜ'-]+$").expect("Could not parse word regex")
});

/// Returns true if the given string is a single Na'vi word: non-empty and
/// containing only letters of the Na'vi alphabet, apostrophes, and hyphens.
pub fn is_word(text: &str) -> bool {
    WORD_REGEX.is_match(text)
}

pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

pub fn ends_with_vowel(word: &str) -> bool {
    word.chars().last().map_or(false, is_vowel)
}

pub fn ends_with_diphthong(word: &str) -> bool {
    DIPHTHONGS.iter().any(|d| word.ends_with(d))
}

pub fn ends_with_pseudovowel(word: &str) -> bool {
    PSEUDOVOWELS.iter().any(|p| word.ends_with(p))
}

/// How a word ends, for suffix selection. Profiles are always derived from
/// the trailing characters of the surface string at hand and never stored,
/// so re-inflecting a derived form (say, a plural) sees that form's own
/// ending rather than the original lemma's.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Profile {
    pub vowel: bool,
    pub diphthong: bool,
    pub pseudovowel: bool,
}

impl Profile {
    pub fn of(word: &str) -> Self {
        Profile {
            vowel: ends_with_vowel(word),
            diphthong: ends_with_diphthong(word),
            pseudovowel: ends_with_pseudovowel(word),
        }
    }
}

/// Softens a leading consonant per the lenition table. Words starting with
/// a cluster or stop outside the table are returned unchanged.
pub fn lenite(word: &str) -> Cow<'_, str> {
    for (from, to) in LENITION {
        if word.starts_with(from) {
            if from == to {
                return Cow::Borrowed(word);
            }
            return Cow::Owned(format!("{}{}", to, &word[from.len()..]));
        }
    }
    Cow::Borrowed(word)
}

/// Splits a word into syllables. A syllable ends at (and includes) the
/// first vowel found scanning left to right; a trailing consonant run with
/// no vowel after it is attached to the last syllable. A word with no vowel
/// at all is a single degenerate syllable.
///
/// Concatenating the returned slices always reconstructs the word exactly.
pub fn syllables(word: &str) -> Vec<&str> {
    let mut ends: Vec<usize> = Vec::new();
    for (i, c) in word.char_indices() {
        if is_vowel(c) {
            ends.push(i + c.len_utf8());
        }
    }

    if ends.is_empty() {
        return if word.is_empty() { vec![] } else { vec![word] };
    }

    if let Some(last) = ends.last_mut() {
        if *last < word.len() {
            *last = word.len();
        }
    }

    let mut syllables = Vec::with_capacity(ends.len());
    let mut start = 0;
    for end in ends {
        syllables.push(&word[start..end]);
        start = end;
    }
    syllables
}

/// Inserts an infix immediately before the first vowel of the syllable at
/// the given index. Negative indices count from the end. An index past
/// either end is clamped: negative overflow targets the last syllable,
/// non-negative overflow the first. A target syllable with no vowel (only
/// possible for a vowel-less word) inserts nothing.
pub fn insert_infix(word: &str, infix: &str, syllable_index: isize) -> String {
    let syllables = syllables(word);
    if syllables.is_empty() {
        return word.to_string();
    }

    let len = syllables.len() as isize;
    let idx = if syllable_index < 0 {
        if -syllable_index > len {
            len - 1
        } else {
            len + syllable_index
        }
    } else if syllable_index >= len {
        0
    } else {
        syllable_index
    } as usize;

    let mut result = String::with_capacity(word.len() + infix.len());
    for (i, syllable) in syllables.iter().enumerate() {
        if i == idx {
            match syllable.char_indices().find(|&(_, c)| is_vowel(c)) {
                Some((at, _)) => {
                    result.push_str(&syllable[..at]);
                    result.push_str(infix);
                    result.push_str(&syllable[at..]);
                }
                None => result.push_str(syllable),
            }
        } else {
            result.push_str(syllable);
        }
    }
    result
}
