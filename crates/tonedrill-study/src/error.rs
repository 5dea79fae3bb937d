use std::io;
use std::path::PathBuf;

/// Errors from loading word lists and talking to a progress store.
#[derive(Debug, thiserror::Error)]
pub enum StudyError {
    /// A file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    /// A file could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    /// The word list is not a JSON array of words.
    #[error("invalid word list: {0}")]
    WordList(#[source] serde_json::Error),

    /// Stored progress for a key is not a JSON array of strings.
    #[error("invalid progress data under {key}: {source}")]
    Progress {
        key: String,
        source: serde_json::Error,
    },

    /// The store cannot hold this key (the empty key).
    #[error("invalid store key: {0:?}")]
    InvalidKey(String),
}

pub type Result<T, E = StudyError> = std::result::Result<T, E>;
