// StudySession: top-level integration point for one learner.
//
// Owns the progress store, the active study set's words (as a deck) and its
// known set, plus the currently open quiz and typing rounds. Every change to
// the known set is written through to the store immediately.
//
// Open rounds are dropped when the set changes. Randomness is passed in per
// call.

use rand::Rng;
use tonedrill_pinyin::Strictness;

use crate::deck::Deck;
use crate::progress::{
    KnownSet, ProgressStats, load_known, preferred_set, save_known, set_preferred_set,
};
use crate::quiz::{DEFAULT_QUIZ_CHOICES, QuizOutcome, QuizRound};
use crate::store::KeyValueStore;
use crate::typing::{TypingOutcome, TypingRound};
use crate::wordlist::{Word, WordList};

/// Study set opened when no preference is stored.
pub const DEFAULT_SET: &str = "hsk3";

/// Session options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudyOptions {
    /// How typed answers are graded.
    pub strictness: Strictness,
    /// Number of choices drawn for a quiz round.
    pub quiz_choices: usize,
}

impl Default for StudyOptions {
    fn default() -> Self {
        Self {
            strictness: Strictness::Lenient,
            quiz_choices: DEFAULT_QUIZ_CHOICES,
        }
    }
}

/// A learner's session over one study set at a time.
pub struct StudySession<S: KeyValueStore> {
    store: S,
    set_id: String,
    deck: Deck,
    known: KnownSet,
    options: StudyOptions,
    quiz: Option<QuizRound>,
    typing: Option<TypingRound>,
}

impl<S: KeyValueStore> StudySession<S> {
    /// Open `set_id` with its word list, loading saved progress from `store`.
    pub fn open(store: S, set_id: impl Into<String>, words: WordList, options: StudyOptions) -> Self {
        let set_id = set_id.into();
        let known = load_known(&store, &set_id);
        tracing::info!(
            set_id = %set_id,
            words = words.len(),
            known = known.len(),
            "opened study set"
        );
        Self {
            store,
            set_id,
            deck: Deck::new(words.into_words()),
            known,
            options,
            quiz: None,
            typing: None,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn set_id(&self) -> &str {
        &self.set_id
    }

    pub fn words(&self) -> &[Word] {
        self.deck.words()
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Deck navigation (next, prev, shuffle).
    pub fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    pub fn known(&self) -> &KnownSet {
        &self.known
    }

    pub fn is_known(&self, hanzi: &str) -> bool {
        self.known.contains(hanzi)
    }

    pub fn options(&self) -> &StudyOptions {
        &self.options
    }

    pub fn set_strictness(&mut self, strictness: Strictness) {
        self.options.strictness = strictness;
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn stats(&self) -> ProgressStats {
        ProgressStats::compute(&self.known, self.deck.words())
    }

    // =========================================================================
    // Study sets and progress
    // =========================================================================

    /// Save the current set's progress, then open `set_id` with `words`.
    ///
    /// The new set becomes the stored preference. Switching to the set that
    /// is already open does nothing.
    pub fn switch_set(&mut self, set_id: impl Into<String>, words: WordList) {
        let set_id = set_id.into();
        if set_id == self.set_id {
            return;
        }
        save_known(&mut self.store, &self.set_id, &self.known);
        set_preferred_set(&mut self.store, &set_id);

        self.known = load_known(&self.store, &set_id);
        self.deck.reset(words.into_words());
        self.quiz = None;
        self.typing = None;
        tracing::info!(
            from = %self.set_id,
            to = %set_id,
            known = self.known.len(),
            "switched study set"
        );
        self.set_id = set_id;
    }

    /// The preferred set stored by an earlier [`switch_set`](Self::switch_set).
    pub fn preferred_set(&self) -> Option<String> {
        preferred_set(&self.store)
    }

    /// Flip the known state of the current flashcard. Returns the new state,
    /// or `None` for an empty deck.
    pub fn toggle_known(&mut self) -> Option<bool> {
        let id = self.deck.current()?.id().to_string();
        let known = self.known.toggle(&id);
        self.persist();
        Some(known)
    }

    /// Mark `hanzi` as known and persist.
    pub fn mark_known(&mut self, hanzi: &str) {
        if self.known.insert(hanzi) {
            self.persist();
        }
    }

    /// Forget every known word of the current set.
    pub fn reset_progress(&mut self) {
        self.known.clear();
        self.persist();
        tracing::info!(set_id = %self.set_id, "progress reset");
    }

    fn persist(&mut self) {
        save_known(&mut self.store, &self.set_id, &self.known);
    }

    // =========================================================================
    // Quiz
    // =========================================================================

    /// Start a new quiz round. `None` if the set has fewer than two words.
    pub fn new_quiz<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<&QuizRound> {
        self.quiz = QuizRound::new(self.deck.words(), self.options.quiz_choices, rng);
        self.quiz.as_ref()
    }

    pub fn quiz(&self) -> Option<&QuizRound> {
        self.quiz.as_ref()
    }

    /// Answer the open quiz round. A correct answer marks the word known.
    pub fn answer_quiz(&mut self, choice: usize) -> Option<QuizOutcome> {
        let outcome = self.quiz.as_mut()?.answer(choice)?;
        if outcome.correct {
            self.mark_known(&outcome.answer_hanzi);
        }
        Some(outcome)
    }

    // =========================================================================
    // Typing
    // =========================================================================

    /// Start a new typing round. `None` for an empty set.
    pub fn new_typing<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<&TypingRound> {
        self.typing = TypingRound::new(self.deck.words(), rng);
        self.typing.as_ref()
    }

    pub fn typing(&self) -> Option<&TypingRound> {
        self.typing.as_ref()
    }

    /// Grade `input` for the open typing round. A correct answer marks the
    /// word known. `None` if no round is open.
    pub fn check_typing(&mut self, input: &str) -> Option<TypingOutcome> {
        let round = self.typing.as_ref()?;
        let outcome = round.check(input, self.options.strictness);
        if outcome.is_correct() {
            let id = round.word().id().to_string();
            self.mark_known(&id);
        }
        Some(outcome)
    }
}
