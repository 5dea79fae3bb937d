// Typed recall: show the characters, grade the learner's pinyin.

use rand::Rng;
use rand::seq::IndexedRandom;
use tonedrill_pinyin::{Grade, Strictness, grade};

use crate::wordlist::Word;

/// Result of checking a typed answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypingOutcome {
    /// Nothing was typed. Not graded.
    Empty,
    /// Accepted; the grade says whether tones were compared.
    Correct(Grade),
    /// Rejected; `expected` is the reference pinyin to show.
    Incorrect { expected: String },
}

impl TypingOutcome {
    pub fn is_correct(&self) -> bool {
        matches!(self, TypingOutcome::Correct(_))
    }
}

/// One typing question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingRound {
    word: Word,
}

impl TypingRound {
    /// Pick a random word. `None` for an empty list.
    pub fn new<R: Rng + ?Sized>(words: &[Word], rng: &mut R) -> Option<Self> {
        words.choose(rng).cloned().map(Self::from_word)
    }

    pub fn from_word(word: Word) -> Self {
        Self { word }
    }

    pub fn word(&self) -> &Word {
        &self.word
    }

    /// Grade `input` against the word's pinyin.
    pub fn check(&self, input: &str, strictness: Strictness) -> TypingOutcome {
        let input = input.trim();
        if input.is_empty() {
            return TypingOutcome::Empty;
        }
        match grade(input, &self.word.pinyin, strictness) {
            Grade::Wrong => TypingOutcome::Incorrect {
                expected: self.word.pinyin.clone(),
            },
            g => TypingOutcome::Correct(g),
        }
    }
}
