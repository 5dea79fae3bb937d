// Flashcard deck: the session's word order plus a cursor.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::wordlist::Word;

/// Words in study order with a current position.
///
/// Navigation wraps around at both ends. Shuffling reorders the words the
/// other study modes draw from too, and moves the cursor back to the start.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    words: Vec<Word>,
    index: usize,
}

impl Deck {
    pub fn new(words: Vec<Word>) -> Self {
        Self { words, index: 0 }
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Move to `index`, clamped to the last card.
    pub fn set_index(&mut self, index: usize) {
        self.index = index.min(self.words.len().saturating_sub(1));
    }

    /// The card under the cursor, `None` for an empty deck.
    pub fn current(&self) -> Option<&Word> {
        self.words.get(self.index)
    }

    pub fn next_card(&mut self) -> Option<&Word> {
        if !self.words.is_empty() {
            self.index = (self.index + 1) % self.words.len();
        }
        self.current()
    }

    pub fn prev_card(&mut self) -> Option<&Word> {
        if !self.words.is_empty() {
            self.index = (self.index + self.words.len() - 1) % self.words.len();
        }
        self.current()
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.words.shuffle(rng);
        self.index = 0;
    }

    /// Replace the words and rewind.
    pub fn reset(&mut self, words: Vec<Word>) {
        self.words = words;
        self.index = 0;
    }
}
