// Known-item progress per study set.
//
// Each set's known identifiers live under `known-<set>` as a JSON array of
// strings. Reading never fails from the caller's point of view: a missing or
// corrupt entry is an empty set. Writing failures are logged and dropped.

use hashbrown::HashSet;

use crate::error::{Result, StudyError};
use crate::store::KeyValueStore;
use crate::wordlist::Word;

/// Store key holding the preferred study set.
pub const SET_PREF_KEY: &str = "level-pref";

/// Store key for a set's known identifiers.
pub fn known_key(set_id: &str) -> String {
    format!("known-{set_id}")
}

// ---------------------------------------------------------------------------
// KnownSet
// ---------------------------------------------------------------------------

/// Identifiers of words the learner has mastered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnownSet {
    items: HashSet<String>,
}

impl KnownSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.contains(id)
    }

    /// Returns `true` if the id was not known before.
    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        self.items.insert(id.into())
    }

    /// Returns `true` if the id was known before.
    pub fn remove(&mut self, id: &str) -> bool {
        self.items.remove(id)
    }

    /// Flip the state of `id`. Returns whether it is known afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.items.remove(id) {
            false
        } else {
            self.items.insert(id.to_string());
            true
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// Number of `words` whose identifier is in the set.
    pub fn count_in(&self, words: &[Word]) -> usize {
        words.iter().filter(|w| self.contains(w.id())).count()
    }

    /// Identifiers in sorted order.
    pub fn to_sorted_vec(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.iter().collect();
        ids.sort_unstable();
        ids
    }

    /// JSON array of identifiers, sorted for stable output.
    pub fn to_json(&self) -> String {
        // Serializing a Vec<&str> cannot fail.
        serde_json::to_string(&self.to_sorted_vec()).unwrap_or_else(|_| "[]".to_string())
    }

    /// Parse a JSON array of identifiers.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let ids: Vec<String> = serde_json::from_str(json)?;
        Ok(ids.into_iter().collect())
    }
}

impl<S: Into<String>> FromIterator<S> for KnownSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Loading and saving
// ---------------------------------------------------------------------------

/// Load the known set for `set_id`, reporting failures.
pub fn try_load_known<S: KeyValueStore + ?Sized>(store: &S, set_id: &str) -> Result<KnownSet> {
    let key = known_key(set_id);
    match store.get(&key)? {
        None => Ok(KnownSet::new()),
        Some(raw) if raw.trim().is_empty() => Ok(KnownSet::new()),
        Some(raw) => {
            KnownSet::from_json(&raw).map_err(|source| StudyError::Progress { key, source })
        }
    }
}

/// Load the known set for `set_id`. Any failure yields an empty set.
pub fn load_known<S: KeyValueStore + ?Sized>(store: &S, set_id: &str) -> KnownSet {
    try_load_known(store, set_id).unwrap_or_else(|e| {
        tracing::warn!(error = %e, set_id, "failed to load progress, starting empty");
        KnownSet::new()
    })
}

/// Persist the known set for `set_id`, reporting failures.
pub fn try_save_known<S: KeyValueStore + ?Sized>(
    store: &mut S,
    set_id: &str,
    known: &KnownSet,
) -> Result<()> {
    store.set(&known_key(set_id), &known.to_json())
}

/// Persist the known set for `set_id`. Failures are logged and ignored.
pub fn save_known<S: KeyValueStore + ?Sized>(store: &mut S, set_id: &str, known: &KnownSet) {
    if let Err(e) = try_save_known(store, set_id, known) {
        tracing::warn!(error = %e, set_id, "failed to save progress");
    }
}

/// The preferred study set, if one was stored.
pub fn preferred_set<S: KeyValueStore + ?Sized>(store: &S) -> Option<String> {
    match store.get(SET_PREF_KEY) {
        Ok(pref) => pref.filter(|p| !p.trim().is_empty()),
        Err(e) => {
            tracing::warn!(error = %e, "failed to read set preference");
            None
        }
    }
}

/// Remember `set_id` as the preferred study set.
pub fn set_preferred_set<S: KeyValueStore + ?Sized>(store: &mut S, set_id: &str) {
    if let Err(e) = store.set(SET_PREF_KEY, set_id) {
        tracing::warn!(error = %e, set_id, "failed to store set preference");
    }
}

// ---------------------------------------------------------------------------
// Statistics
// ---------------------------------------------------------------------------

/// Progress summary for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressStats {
    pub known: usize,
    pub total: usize,
    /// Percentage of known words, rounded to one decimal place.
    pub percent: f64,
}

impl ProgressStats {
    pub fn new(known: usize, total: usize) -> Self {
        let percent = if total == 0 {
            0.0
        } else {
            (known as f64 / total as f64 * 1000.0).round() / 10.0
        };
        Self {
            known,
            total,
            percent,
        }
    }

    /// Stats for `words` against `known`.
    pub fn compute(known: &KnownSet, words: &[Word]) -> Self {
        Self::new(known.count_in(words), words.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn words(ids: &[&str]) -> Vec<Word> {
        ids.iter().map(|id| Word::new(*id, "", "")).collect()
    }

    // -- KnownSet --

    #[test]
    fn toggle_flips_state() {
        let mut known = KnownSet::new();
        assert!(known.toggle("好"));
        assert!(known.contains("好"));
        assert!(!known.toggle("好"));
        assert!(!known.contains("好"));
    }

    #[test]
    fn insert_reports_novelty() {
        let mut known = KnownSet::new();
        assert!(known.insert("好"));
        assert!(!known.insert("好"));
        assert_eq!(known.len(), 1);
    }

    #[test]
    fn json_is_sorted() {
        let known: KnownSet = ["b", "c", "a"].into_iter().collect();
        assert_eq!(known.to_json(), r#"["a","b","c"]"#);
        assert_eq!(KnownSet::from_json(&known.to_json()).unwrap(), known);
    }

    #[test]
    fn count_in_ignores_stale_ids() {
        let known: KnownSet = ["a", "gone"].into_iter().collect();
        assert_eq!(known.count_in(&words(&["a", "b"])), 1);
    }

    // -- Loading and saving --

    #[test]
    fn missing_key_is_empty() {
        let store = MemoryStore::new();
        assert!(load_known(&store, "hsk3").is_empty());
    }

    #[test]
    fn corrupt_entry_is_empty() {
        let store: MemoryStore = [("known-hsk3", "{not json")].into_iter().collect();
        assert!(load_known(&store, "hsk3").is_empty());
        assert!(matches!(
            try_load_known(&store, "hsk3"),
            Err(StudyError::Progress { .. })
        ));
    }

    #[test]
    fn save_then_load() {
        let mut store = MemoryStore::new();
        let known: KnownSet = ["你好", "谢谢"].into_iter().collect();
        save_known(&mut store, "hsk4", &known);
        assert_eq!(
            store.get("known-hsk4").unwrap().as_deref(),
            Some(r#"["你好","谢谢"]"#)
        );
        assert_eq!(load_known(&store, "hsk4"), known);
        assert!(load_known(&store, "hsk3").is_empty());
    }

    #[test]
    fn preference_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(preferred_set(&store), None);
        set_preferred_set(&mut store, "hsk4");
        assert_eq!(preferred_set(&store).as_deref(), Some("hsk4"));
    }

    // -- ProgressStats --

    #[test]
    fn stats_round_to_one_decimal() {
        assert_eq!(ProgressStats::new(1, 3).percent, 33.3);
        assert_eq!(ProgressStats::new(2, 3).percent, 66.7);
        assert_eq!(ProgressStats::new(3, 3).percent, 100.0);
    }

    #[test]
    fn stats_for_empty_list() {
        let stats = ProgressStats::new(0, 0);
        assert_eq!(stats.percent, 0.0);
        assert_eq!(stats.total, 0);
    }

    #[test]
    fn stats_compute() {
        let known: KnownSet = ["a"].into_iter().collect();
        let stats = ProgressStats::compute(&known, &words(&["a", "b", "c", "d"]));
        assert_eq!(stats.known, 1);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.percent, 25.0);
    }
}
