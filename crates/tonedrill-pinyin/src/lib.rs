//! Pinyin normalization and answer comparison.
//!
//! Learners type answers with tone marks (`nǐ hǎo`), tone numbers
//! (`ni3 hao3`) or no tones at all (`ni hao`). This crate reduces all of
//! them to one canonical numeric form and decides whether an answer matches
//! a reference.
//!
//! - [`normalize`] -- text to [`Transcription`](tonedrill_core::Transcription)
//!   and canonical numeric strings
//! - [`compare`] -- equivalence checks under a configurable [`Strictness`]
//!
//! Normalization and comparison never return errors: characters outside the
//! pinyin alphabet are dropped.

pub mod compare;
pub mod normalize;

pub use compare::{
    Grade, Strictness, UnknownStrictness, equivalent, equivalent_with, grade, grade_transcriptions,
};
pub use normalize::{normalize_display, normalize_to_numeric, parse, strip_tones};
