// Syllable and Transcription value types.

use std::fmt;

use crate::character::is_vowel;
use crate::tone::Tone;

// ---------------------------------------------------------------------------
// Syllable
// ---------------------------------------------------------------------------

/// One phonetic unit: a run of canonical letters plus an optional tone.
///
/// A syllable without vowels (a bare consonant cluster such as `n` or `hm`)
/// never carries a tone; [`Syllable::new`] drops it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Syllable {
    /// Canonical letters: ASCII lowercase, `v` for `ü`, no tone marks.
    pub letters: String,

    /// Recorded tone, `Tone::Neutral` when none.
    pub tone: Tone,
}

impl Syllable {
    /// Create a syllable. The tone is discarded when `letters` has no vowel.
    pub fn new(letters: impl Into<String>, tone: Tone) -> Self {
        let mut syllable = Self {
            letters: letters.into(),
            tone,
        };
        if !syllable.has_vowel() {
            syllable.tone = Tone::Neutral;
        }
        syllable
    }

    /// Create a syllable with no tone.
    pub fn toneless(letters: impl Into<String>) -> Self {
        Self::new(letters, Tone::Neutral)
    }

    /// Whether the letters contain a pinyin vowel.
    pub fn has_vowel(&self) -> bool {
        self.letters.chars().any(is_vowel)
    }

    /// Whether a tone was recorded for this syllable.
    pub fn is_toned(&self) -> bool {
        self.tone.is_marked()
    }
}

impl fmt::Display for Syllable {
    /// Canonical numeric form, e.g. `hao3`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.letters)?;
        if self.tone.is_marked() {
            write!(f, "{}", self.tone)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Transcription
// ---------------------------------------------------------------------------

/// An ordered sequence of syllables.
///
/// Built fresh from raw text for every comparison and then thrown away.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Transcription {
    pub syllables: Vec<Syllable>,
}

impl Transcription {
    pub fn new(syllables: Vec<Syllable>) -> Self {
        Self { syllables }
    }

    pub fn len(&self) -> usize {
        self.syllables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.syllables.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Syllable> {
        self.syllables.iter()
    }
}

impl FromIterator<Syllable> for Transcription {
    fn from_iter<I: IntoIterator<Item = Syllable>>(iter: I) -> Self {
        Self {
            syllables: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Transcription {
    type Item = &'a Syllable;
    type IntoIter = std::slice::Iter<'a, Syllable>;

    fn into_iter(self) -> Self::IntoIter {
        self.syllables.iter()
    }
}

impl fmt::Display for Transcription {
    /// Canonical numeric form: syllables joined by single spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, syllable) in self.syllables.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{syllable}")?;
        }
        Ok(())
    }
}
