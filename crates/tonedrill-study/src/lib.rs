//! Study modes and progress tracking for tonedrill.
//!
//! This is the application layer around `tonedrill-pinyin`. It has no UI:
//! front ends (CLI, WASM) drive a [`StudySession`] and render its state.
//!
//! # Architecture
//!
//! - [`wordlist`] -- `{ hanzi, pinyin, english }` word lists in JSON
//! - [`store`] -- the [`KeyValueStore`] trait with memory and directory backends
//! - [`progress`] -- known sets per study set, set preference, statistics
//! - [`deck`] -- flashcard navigation
//! - [`quiz`] -- multiple-choice rounds
//! - [`typing`] -- typed-recall rounds graded by the pinyin comparator
//! - [`session`] -- [`StudySession`], tying the above together

pub mod deck;
pub mod error;
pub mod progress;
pub mod quiz;
pub mod session;
pub mod store;
pub mod typing;
pub mod wordlist;

pub use error::{Result, StudyError};
pub use progress::{KnownSet, ProgressStats};
pub use session::{DEFAULT_SET, StudyOptions, StudySession};
pub use store::{DirStore, KeyValueStore, MemoryStore};
pub use typing::TypingOutcome;
pub use wordlist::{Word, WordList};
