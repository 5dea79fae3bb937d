// WASM bindings for tonedrill.
//
// Exposes the pinyin comparator as free functions and a `WasmStudy` class
// wrapping a `StudySession` over an in-memory store. The page owns
// persistence: it passes previously exported entries to the constructor and
// saves `exportStore()` after each change.
//
// Usage from JavaScript:
//
//   normalizeToNumeric("nǐ hǎo");            // => "ni3 hao3"
//   equivalent("ni hao", "nǐ hǎo");          // => true
//   equivalentWith("ma", "mā", "strict");    // => false
//
//   const study = new WasmStudy("hsk3", wordsJson, localStorage.tonedrill);
//   study.current();                         // => { hanzi, pinyin, english, known }
//   study.newTyping();                       // => { hanzi, english }
//   study.checkTyping("ni3 hao3");           // => { result: "exact", correct: true, ... }
//   localStorage.tonedrill = study.exportStore();

use std::collections::BTreeMap;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use tonedrill_pinyin::{Grade, Strictness};
use tonedrill_study::{
    MemoryStore, ProgressStats, StudyOptions, StudySession, TypingOutcome, Word, WordList,
};

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// A flashcard with its known flag.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsCard {
    hanzi: String,
    pinyin: String,
    english: String,
    known: bool,
    index: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsStats {
    known: usize,
    total: usize,
    percent: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsQuiz {
    prompt: String,
    choices: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsQuizOutcome {
    correct: bool,
    chosen: usize,
    answer_hanzi: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsTyping {
    hanzi: String,
    english: String,
}

/// `result` is one of "empty", "exact", "toneInsensitive" or "incorrect".
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsTypingOutcome {
    result: &'static str,
    correct: bool,
    expected: Option<String>,
}

// ============================================================================
// Conversion helpers
// ============================================================================

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

fn parse_strictness(name: &str) -> Result<Strictness, JsError> {
    name.parse::<Strictness>().map_err(|e| JsError::new(&e.to_string()))
}

fn parse_words(words_json: &str) -> Result<WordList, JsError> {
    WordList::from_json(words_json).map_err(|e| JsError::new(&e.to_string()))
}

fn parse_store(store_json: Option<String>) -> Result<MemoryStore, JsError> {
    let Some(json) = store_json.filter(|s| !s.trim().is_empty()) else {
        return Ok(MemoryStore::new());
    };
    let entries: BTreeMap<String, String> =
        serde_json::from_str(&json).map_err(|e| JsError::new(&format!("invalid store: {e}")))?;
    Ok(entries.into_iter().collect())
}

fn store_to_json(store: &MemoryStore) -> serde_json::Result<String> {
    let entries: BTreeMap<&str, &str> = store.entries().into_iter().collect();
    serde_json::to_string(&entries)
}

fn stats_to_js(stats: ProgressStats) -> JsStats {
    JsStats {
        known: stats.known,
        total: stats.total,
        percent: stats.percent,
    }
}

fn typing_outcome_to_js(outcome: TypingOutcome) -> JsTypingOutcome {
    match outcome {
        TypingOutcome::Empty => JsTypingOutcome {
            result: "empty",
            correct: false,
            expected: None,
        },
        TypingOutcome::Correct(grade) => JsTypingOutcome {
            result: match grade {
                Grade::ToneInsensitive => "toneInsensitive",
                _ => "exact",
            },
            correct: true,
            expected: None,
        },
        TypingOutcome::Incorrect { expected } => JsTypingOutcome {
            result: "incorrect",
            correct: false,
            expected: Some(expected),
        },
    }
}

fn seeded_rng() -> SmallRng {
    SmallRng::seed_from_u64((js_sys::Math::random() * u64::MAX as f64) as u64)
}

// ============================================================================
// Free functions
// ============================================================================

/// Canonical numeric form of a pinyin string, e.g. `"ni3 hao3"`.
#[wasm_bindgen(js_name = "normalizeToNumeric")]
pub fn normalize_to_numeric(input: &str) -> String {
    tonedrill_pinyin::normalize_to_numeric(input)
}

/// Lowercased, whitespace-collapsed pinyin without tone marks.
#[wasm_bindgen(js_name = "normalizeDisplay")]
pub fn normalize_display(input: &str) -> String {
    tonedrill_pinyin::normalize_display(input)
}

/// Whether two pinyin strings match with lenient tone grading.
#[wasm_bindgen]
pub fn equivalent(a: &str, b: &str) -> bool {
    tonedrill_pinyin::equivalent(a, b)
}

/// Whether two pinyin strings match under a named strictness
/// ("strict", "lenient" or "ignore-tones").
#[wasm_bindgen(js_name = "equivalentWith")]
pub fn equivalent_with(a: &str, b: &str, strictness: &str) -> Result<bool, JsError> {
    Ok(tonedrill_pinyin::equivalent_with(
        a,
        b,
        parse_strictness(strictness)?,
    ))
}

// ============================================================================
// WasmStudy
// ============================================================================

/// Study session for the browser.
#[wasm_bindgen]
pub struct WasmStudy {
    session: StudySession<MemoryStore>,
    rng: SmallRng,
}

#[wasm_bindgen]
impl WasmStudy {
    /// Open a study set.
    ///
    /// - `set_id`: study set name, e.g. "hsk3"
    /// - `words_json`: word list as a JSON array of `{ hanzi, pinyin, english }`
    /// - `store_json`: output of a previous `exportStore()`, optional
    #[wasm_bindgen(constructor)]
    pub fn new(
        set_id: &str,
        words_json: &str,
        store_json: Option<String>,
    ) -> Result<WasmStudy, JsError> {
        let words = parse_words(words_json)?;
        let store = parse_store(store_json)?;
        Ok(WasmStudy::open(store, set_id, words, seeded_rng()))
    }

    #[wasm_bindgen(getter, js_name = "setId")]
    pub fn set_id(&self) -> String {
        self.session.set_id().to_string()
    }

    /// All store entries as a JSON object, keys sorted.
    #[wasm_bindgen(js_name = "exportStore")]
    pub fn export_store(&self) -> Result<String, JsError> {
        store_to_json(self.session.store()).map_err(|e| JsError::new(&e.to_string()))
    }

    /// The set the learner studied last, if any.
    #[wasm_bindgen(js_name = "preferredSet")]
    pub fn preferred_set(&self) -> Option<String> {
        self.session.preferred_set()
    }

    /// Switch to another set, saving the current one first.
    #[wasm_bindgen(js_name = "switchSet")]
    pub fn switch_set(&mut self, set_id: &str, words_json: &str) -> Result<(), JsError> {
        let words = parse_words(words_json)?;
        self.session.switch_set(set_id, words);
        Ok(())
    }

    /// Set tone grading: "strict", "lenient" or "ignore-tones".
    #[wasm_bindgen(js_name = "setStrictness")]
    pub fn set_strictness(&mut self, strictness: &str) -> Result<(), JsError> {
        self.session.set_strictness(parse_strictness(strictness)?);
        Ok(())
    }

    // =========================================================================
    // Flashcards
    // =========================================================================

    /// Current flashcard, or null for an empty set.
    pub fn current(&self) -> Result<JsValue, JsError> {
        let deck = self.session.deck();
        match deck.current() {
            Some(word) => to_js(&self.card(word, deck.index())),
            None => Ok(JsValue::NULL),
        }
    }

    /// Advance to the next card (wrapping) and return it.
    #[wasm_bindgen(js_name = "next")]
    pub fn next_card(&mut self) -> Result<JsValue, JsError> {
        self.session.deck_mut().next_card();
        self.current()
    }

    /// Go back one card (wrapping) and return it.
    #[wasm_bindgen(js_name = "prev")]
    pub fn prev_card(&mut self) -> Result<JsValue, JsError> {
        self.session.deck_mut().prev_card();
        self.current()
    }

    /// Jump to card `index`, clamped to the deck. Returns the index landed on.
    #[wasm_bindgen(js_name = "goTo")]
    pub fn go_to(&mut self, index: usize) -> usize {
        let deck = self.session.deck_mut();
        deck.set_index(index);
        deck.index()
    }

    /// Shuffle the deck and return the first card.
    pub fn shuffle(&mut self) -> Result<JsValue, JsError> {
        self.session.deck_mut().shuffle(&mut self.rng);
        self.current()
    }

    /// Toggle the known flag of the current card. Returns the new flag, or
    /// null for an empty set.
    #[wasm_bindgen(js_name = "toggleKnown")]
    pub fn toggle_known(&mut self) -> Option<bool> {
        self.session.toggle_known()
    }

    #[wasm_bindgen(js_name = "resetProgress")]
    pub fn reset_progress(&mut self) {
        self.session.reset_progress();
    }

    pub fn stats(&self) -> Result<JsValue, JsError> {
        to_js(&stats_to_js(self.session.stats()))
    }

    // =========================================================================
    // Quiz and typing
    // =========================================================================

    /// Start a multiple-choice round. Null when the set has fewer than two
    /// words.
    #[wasm_bindgen(js_name = "newQuiz")]
    pub fn new_quiz(&mut self) -> Result<JsValue, JsError> {
        match self.session.new_quiz(&mut self.rng) {
            Some(round) => to_js(&JsQuiz {
                prompt: round.prompt(),
                choices: round.choices().iter().map(|w| w.hanzi.clone()).collect(),
            }),
            None => Ok(JsValue::NULL),
        }
    }

    /// Answer the open quiz round by choice index. Null when no round is open,
    /// it was already answered, or the index is out of range.
    #[wasm_bindgen(js_name = "answerQuiz")]
    pub fn answer_quiz(&mut self, choice: usize) -> Result<JsValue, JsError> {
        match self.session.answer_quiz(choice) {
            Some(outcome) => to_js(&JsQuizOutcome {
                correct: outcome.correct,
                chosen: outcome.chosen,
                answer_hanzi: outcome.answer_hanzi,
            }),
            None => Ok(JsValue::NULL),
        }
    }

    /// Start a typed-recall round. Null for an empty set.
    #[wasm_bindgen(js_name = "newTyping")]
    pub fn new_typing(&mut self) -> Result<JsValue, JsError> {
        match self.session.new_typing(&mut self.rng) {
            Some(round) => to_js(&JsTyping {
                hanzi: round.word().hanzi.clone(),
                english: round.word().english.clone(),
            }),
            None => Ok(JsValue::NULL),
        }
    }

    /// Grade typed pinyin against the open typing round. Null when no round
    /// is open.
    #[wasm_bindgen(js_name = "checkTyping")]
    pub fn check_typing(&mut self, input: &str) -> Result<JsValue, JsError> {
        match self.session.check_typing(input) {
            Some(outcome) => to_js(&typing_outcome_to_js(outcome)),
            None => Ok(JsValue::NULL),
        }
    }
}

impl WasmStudy {
    fn open(store: MemoryStore, set_id: &str, words: WordList, rng: SmallRng) -> Self {
        WasmStudy {
            session: StudySession::open(store, set_id, words, StudyOptions::default()),
            rng,
        }
    }

    fn card(&self, word: &Word, index: usize) -> JsCard {
        JsCard {
            hanzi: word.hanzi.clone(),
            pinyin: word.pinyin.clone(),
            english: word.english.clone(),
            known: self.session.is_known(&word.hanzi),
            index,
        }
    }
}
