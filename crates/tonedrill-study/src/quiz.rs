// Multiple-choice quiz: pick the characters matching a pinyin + gloss prompt.

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::wordlist::Word;

/// Number of choices offered when none is configured.
pub const DEFAULT_QUIZ_CHOICES: usize = 4;

/// Result of answering a quiz round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizOutcome {
    pub correct: bool,
    /// Index of the choice the learner picked.
    pub chosen: usize,
    /// Characters of the right answer.
    pub answer_hanzi: String,
}

/// One quiz question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRound {
    choices: Vec<Word>,
    answer: usize,
    answered: Option<usize>,
}

impl QuizRound {
    /// Draw up to `choices` distinct words and pick one as the answer.
    ///
    /// Returns `None` when fewer than two words are available.
    pub fn new<R: Rng + ?Sized>(words: &[Word], choices: usize, rng: &mut R) -> Option<Self> {
        let picked: Vec<Word> = words.choose_multiple(rng, choices).cloned().collect();
        if picked.len() < 2 {
            return None;
        }
        let answer = rng.random_range(0..picked.len());
        Some(Self {
            choices: picked,
            answer,
            answered: None,
        })
    }

    /// Build a round from explicit choices. `None` if `answer` is out of
    /// range or there are fewer than two choices.
    pub fn from_choices(choices: Vec<Word>, answer: usize) -> Option<Self> {
        if choices.len() < 2 || answer >= choices.len() {
            return None;
        }
        Some(Self {
            choices,
            answer,
            answered: None,
        })
    }

    pub fn choices(&self) -> &[Word] {
        &self.choices
    }

    pub fn answer_index(&self) -> usize {
        self.answer
    }

    pub fn answer_word(&self) -> &Word {
        &self.choices[self.answer]
    }

    /// Prompt text: the answer's pinyin and gloss.
    pub fn prompt(&self) -> String {
        let word = self.answer_word();
        format!("{} — {}", word.pinyin, word.english)
    }

    pub fn is_answered(&self) -> bool {
        self.answered.is_some()
    }

    /// Answer the round. Only the first answer counts; later calls and
    /// out-of-range choices return `None`.
    pub fn answer(&mut self, choice: usize) -> Option<QuizOutcome> {
        if self.answered.is_some() || choice >= self.choices.len() {
            return None;
        }
        self.answered = Some(choice);
        let answer = self.answer_word();
        Some(QuizOutcome {
            correct: self.choices[choice].hanzi == answer.hanzi,
            chosen: choice,
            answer_hanzi: answer.hanzi.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn words(ids: &[&str]) -> Vec<Word> {
        ids.iter()
            .map(|id| Word::new(*id, format!("{id}-py"), format!("{id}-en")))
            .collect()
    }

    #[test]
    fn draws_at_most_the_requested_choices() {
        let list = words(&["a", "b", "c", "d", "e", "f"]);
        let round = QuizRound::new(&list, 4, &mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(round.choices().len(), 4);
        assert!(round.answer_index() < 4);

        let mut ids: Vec<&str> = round.choices().iter().map(|w| w.hanzi.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn small_lists_use_every_word() {
        let list = words(&["a", "b"]);
        let round = QuizRound::new(&list, 4, &mut StdRng::seed_from_u64(2)).unwrap();
        assert_eq!(round.choices().len(), 2);
    }

    #[test]
    fn needs_two_words() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(QuizRound::new(&words(&["a"]), 4, &mut rng).is_none());
        assert!(QuizRound::new(&[], 4, &mut rng).is_none());
    }

    #[test]
    fn prompt_shows_pinyin_and_gloss() {
        let round = QuizRound::from_choices(words(&["a", "b"]), 1).unwrap();
        assert_eq!(round.prompt(), "b-py — b-en");
    }

    #[test]
    fn correct_answer() {
        let mut round = QuizRound::from_choices(words(&["a", "b", "c"]), 2).unwrap();
        let outcome = round.answer(2).unwrap();
        assert!(outcome.correct);
        assert_eq!(outcome.answer_hanzi, "c");
        assert!(round.is_answered());
    }

    #[test]
    fn wrong_answer_reveals_the_right_one() {
        let mut round = QuizRound::from_choices(words(&["a", "b", "c"]), 2).unwrap();
        let outcome = round.answer(0).unwrap();
        assert!(!outcome.correct);
        assert_eq!(outcome.chosen, 0);
        assert_eq!(outcome.answer_hanzi, "c");
    }

    #[test]
    fn only_first_answer_counts() {
        let mut round = QuizRound::from_choices(words(&["a", "b"]), 0).unwrap();
        assert!(round.answer(1).is_some());
        assert!(round.answer(0).is_none());
    }

    #[test]
    fn out_of_range_choice() {
        let mut round = QuizRound::from_choices(words(&["a", "b"]), 0).unwrap();
        assert!(round.answer(5).is_none());
        assert!(!round.is_answered());
    }

    #[test]
    fn from_choices_validates() {
        assert!(QuizRound::from_choices(words(&["a", "b"]), 2).is_none());
        assert!(QuizRound::from_choices(words(&["a"]), 0).is_none());
    }
}
