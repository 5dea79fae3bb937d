// Word lists: JSON arrays of { hanzi, pinyin, english } entries.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StudyError};

/// One vocabulary item.
///
/// Missing fields deserialize as empty strings; the front end shows a
/// placeholder for them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Word {
    /// Characters. Also the identifier used for progress tracking.
    pub hanzi: String,
    /// Reference pronunciation, usually tone-marked.
    pub pinyin: String,
    /// Gloss.
    pub english: String,
}

impl Word {
    pub fn new(
        hanzi: impl Into<String>,
        pinyin: impl Into<String>,
        english: impl Into<String>,
    ) -> Self {
        Self {
            hanzi: hanzi.into(),
            pinyin: pinyin.into(),
            english: english.into(),
        }
    }

    /// Identifier stored in the known set.
    pub fn id(&self) -> &str {
        &self.hanzi
    }
}

/// An ordered list of words for one study set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordList {
    words: Vec<Word>,
}

impl WordList {
    pub fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Parse a JSON array of words.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(StudyError::WordList)
    }

    /// Read and parse a word list file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| StudyError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let list = Self::from_json(&json)?;
        tracing::debug!(path = %path.display(), words = list.len(), "loaded word list");
        Ok(list)
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

    /// Find a word by its identifier.
    pub fn get(&self, hanzi: &str) -> Option<&Word> {
        self.words.iter().find(|w| w.hanzi == hanzi)
    }

    pub fn into_words(self) -> Vec<Word> {
        self.words
    }
}

impl From<Vec<Word>> for WordList {
    fn from(words: Vec<Word>) -> Self {
        Self { words }
    }
}

impl FromIterator<Word> for WordList {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        { "hanzi": "你好", "pinyin": "nǐ hǎo", "english": "hello" },
        { "hanzi": "谢谢", "pinyin": "xièxie", "english": "thanks" }
    ]"#;

    #[test]
    fn parses_json_array() {
        let list = WordList::from_json(SAMPLE).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.words()[0], Word::new("你好", "nǐ hǎo", "hello"));
        assert_eq!(list.words()[1].id(), "谢谢");
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let list = WordList::from_json(r#"[{ "hanzi": "好" }]"#).unwrap();
        assert_eq!(list.words()[0].pinyin, "");
        assert_eq!(list.words()[0].english, "");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let list =
            WordList::from_json(r#"[{ "hanzi": "好", "pinyin": "hǎo", "level": 1 }]"#).unwrap();
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn rejects_non_array() {
        let err = WordList::from_json(r#"{ "hanzi": "好" }"#).unwrap_err();
        assert!(matches!(err, StudyError::WordList(_)));
        assert!(err.to_string().starts_with("invalid word list"));
    }

    #[test]
    fn lookup_by_hanzi() {
        let list = WordList::from_json(SAMPLE).unwrap();
        assert_eq!(list.get("谢谢").map(|w| w.english.as_str()), Some("thanks"));
        assert!(list.get("再见").is_none());
    }

    #[test]
    fn empty_list() {
        let list = WordList::from_json("[]").unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn from_path_reports_missing_file() {
        let err = WordList::from_path(Path::new("/nonexistent/hsk3.json")).unwrap_err();
        assert!(matches!(err, StudyError::Read { .. }));
        assert!(err.to_string().contains("/nonexistent/hsk3.json"));
    }

    #[test]
    fn from_path_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hsk3.json");
        std::fs::write(&path, SAMPLE).unwrap();
        let list = WordList::from_path(&path).unwrap();
        assert_eq!(list.len(), 2);
    }
}
