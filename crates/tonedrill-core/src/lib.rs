//! Shared types for tonedrill.
//!
//! - [`tone`] -- the [`Tone`](tone::Tone) enum and its digit encoding
//! - [`character`] -- the static diacritic map and per-character classification
//! - [`syllable`] -- [`Syllable`](syllable::Syllable) and
//!   [`Transcription`](syllable::Transcription) values

pub mod character;
pub mod syllable;
pub mod tone;

pub use character::CharClass;
pub use syllable::{Syllable, Transcription};
pub use tone::Tone;
