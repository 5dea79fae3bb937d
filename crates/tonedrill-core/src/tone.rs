// Tone markers for Mandarin syllables.

use std::fmt;

/// Lexical tone of a syllable.
///
/// `Neutral` doubles as "no tone recorded": canonical numeric form never
/// writes a digit for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Tone {
    /// Neutral tone, or no tone marking at all.
    #[default]
    Neutral,
    /// High level tone (ā).
    First,
    /// Rising tone (á).
    Second,
    /// Dipping tone (ǎ).
    Third,
    /// Falling tone (à).
    Fourth,
}

impl Tone {
    /// All marked tones, in numeric order.
    pub const MARKED: [Tone; 4] = [Tone::First, Tone::Second, Tone::Third, Tone::Fourth];

    /// Numeric value of the tone, 0 for neutral.
    pub fn digit(self) -> u8 {
        match self {
            Tone::Neutral => 0,
            Tone::First => 1,
            Tone::Second => 2,
            Tone::Third => 3,
            Tone::Fourth => 4,
        }
    }

    /// Tone written by an ASCII digit character. Only `1`-`4` are tone
    /// digits; `0` and `5` are not accepted here.
    pub fn from_ascii_digit(c: char) -> Option<Tone> {
        match c {
            '1' => Some(Tone::First),
            '2' => Some(Tone::Second),
            '3' => Some(Tone::Third),
            '4' => Some(Tone::Fourth),
            _ => None,
        }
    }

    /// Whether a tone was actually recorded.
    pub fn is_marked(self) -> bool {
        self != Tone::Neutral
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.digit())
    }
}
