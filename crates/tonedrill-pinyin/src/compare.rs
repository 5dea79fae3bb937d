// Answer comparison on top of the normalizer.
//
// Both sides are parsed into transcriptions. Identical canonical forms always
// match; whether anything looser is accepted depends on `Strictness`.

use std::fmt;
use std::str::FromStr;

use tonedrill_core::{Syllable, Transcription};

use crate::normalize::parse;

/// How strictly tones are graded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strictness {
    /// Only identical canonical forms match.
    Strict,
    /// A syllable written without a tone matches the same letters with any
    /// tone. Two toned syllables must agree.
    #[default]
    Lenient,
    /// Tones are ignored entirely.
    IgnoreTones,
}

impl Strictness {
    /// Name used in configuration and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Strictness::Strict => "strict",
            Strictness::Lenient => "lenient",
            Strictness::IgnoreTones => "ignore-tones",
        }
    }
}

/// Error for an unrecognized strictness name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown strictness {0:?} (expected strict, lenient or ignore-tones)")]
pub struct UnknownStrictness(pub String);

impl FromStr for Strictness {
    type Err = UnknownStrictness;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Strictness::Strict),
            "lenient" => Ok(Strictness::Lenient),
            "ignore-tones" | "ignore_tones" => Ok(Strictness::IgnoreTones),
            _ => Err(UnknownStrictness(s.to_string())),
        }
    }
}

impl fmt::Display for Strictness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of grading one answer against a reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grade {
    /// Canonical forms are identical.
    Exact,
    /// Accepted only because tones were not compared (in full or in part).
    ToneInsensitive,
    /// Not equivalent.
    Wrong,
}

impl Grade {
    pub fn is_correct(self) -> bool {
        self != Grade::Wrong
    }
}

/// Grade `answer` against `reference`.
pub fn grade(answer: &str, reference: &str, strictness: Strictness) -> Grade {
    grade_transcriptions(&parse(answer), &parse(reference), strictness)
}

/// Grade two already-parsed transcriptions.
pub fn grade_transcriptions(a: &Transcription, b: &Transcription, strictness: Strictness) -> Grade {
    if a == b {
        return Grade::Exact;
    }
    if a.len() != b.len() {
        return Grade::Wrong;
    }

    let syllable_match: fn(&Syllable, &Syllable) -> bool = match strictness {
        Strictness::Strict => return Grade::Wrong,
        Strictness::Lenient => lenient_match,
        Strictness::IgnoreTones => same_letters,
    };

    if a.iter().zip(b).all(|(x, y)| syllable_match(x, y)) {
        Grade::ToneInsensitive
    } else {
        Grade::Wrong
    }
}

fn same_letters(a: &Syllable, b: &Syllable) -> bool {
    a.letters == b.letters
}

fn lenient_match(a: &Syllable, b: &Syllable) -> bool {
    same_letters(a, b) && (!a.is_toned() || !b.is_toned() || a.tone == b.tone)
}

/// Whether two pinyin strings are equivalent under [`Strictness::Lenient`].
///
/// ```
/// use tonedrill_pinyin::equivalent;
///
/// assert!(equivalent("ma1", "mā"));
/// assert!(equivalent("ni hao", "nǐ hǎo"));
/// assert!(!equivalent("ma1", "ma4"));
/// ```
pub fn equivalent(a: &str, b: &str) -> bool {
    equivalent_with(a, b, Strictness::default())
}

/// Whether two pinyin strings are equivalent under the given strictness.
pub fn equivalent_with(a: &str, b: &str, strictness: Strictness) -> bool {
    grade(a, b, strictness).is_correct()
}
