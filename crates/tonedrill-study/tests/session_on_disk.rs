//! Sessions backed by a directory store: progress must survive reopening.
//!
//! Run: cargo test -p tonedrill-study --test session_on_disk

use rand::SeedableRng;
use rand::rngs::StdRng;
use tonedrill_study::{DirStore, KeyValueStore, StudyOptions, StudySession, WordList};

const HSK3: &str = r#"[
    { "hanzi": "你好", "pinyin": "nǐ hǎo", "english": "hello" },
    { "hanzi": "谢谢", "pinyin": "xièxie", "english": "thanks" },
    { "hanzi": "绿色", "pinyin": "lǜsè", "english": "green" }
]"#;

const HSK4: &str = r#"[
    { "hanzi": "安排", "pinyin": "ānpái", "english": "arrange" },
    { "hanzi": "按照", "pinyin": "ànzhào", "english": "according to" }
]"#;

fn open(dir: &std::path::Path, set: &str, json: &str) -> StudySession<DirStore> {
    StudySession::open(
        DirStore::new(dir),
        set,
        WordList::from_json(json).unwrap(),
        StudyOptions::default(),
    )
}

#[test]
fn progress_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();

    let mut session = open(dir.path(), "hsk3", HSK3);
    session.toggle_known();
    session.mark_known("绿色");
    drop(session);

    let session = open(dir.path(), "hsk3", HSK3);
    assert!(session.is_known("你好"));
    assert!(session.is_known("绿色"));
    assert!(!session.is_known("谢谢"));
    assert_eq!(session.stats().percent, 66.7);
}

#[test]
fn sets_are_tracked_separately() {
    let dir = tempfile::tempdir().unwrap();

    let mut session = open(dir.path(), "hsk3", HSK3);
    session.mark_known("你好");
    session.switch_set("hsk4", WordList::from_json(HSK4).unwrap());
    session.mark_known("安排");

    let store = session.into_store();
    assert_eq!(
        store.get("known-hsk3").unwrap().as_deref(),
        Some(r#"["你好"]"#)
    );
    assert_eq!(
        store.get("known-hsk4").unwrap().as_deref(),
        Some(r#"["安排"]"#)
    );
    assert_eq!(store.get("level-pref").unwrap().as_deref(), Some("hsk4"));
}

#[test]
fn typed_recall_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = open(dir.path(), "hsk3", HSK3);
    let mut rng = StdRng::seed_from_u64(42);

    let word = session.new_typing(&mut rng).unwrap().word().clone();
    let numeric = tonedrill_pinyin::normalize_to_numeric(&word.pinyin);
    assert!(session.check_typing(&numeric).unwrap().is_correct());

    let reopened = open(dir.path(), "hsk3", HSK3);
    assert!(reopened.is_known(&word.hanzi));
}

#[test]
fn corrupt_progress_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("known-hsk3.json"), "not json").unwrap();

    let mut session = open(dir.path(), "hsk3", HSK3);
    assert!(session.known().is_empty());

    session.mark_known("谢谢");
    let reopened = open(dir.path(), "hsk3", HSK3);
    assert!(reopened.is_known("谢谢"));
}

#[test]
fn set_names_outside_ascii_keep_progress() {
    let dir = tempfile::tempdir().unwrap();

    for set in ["hsk-3.0", "初级"] {
        let mut session = open(dir.path(), set, HSK3);
        assert_eq!(session.toggle_known(), Some(true));
        drop(session);

        let reopened = open(dir.path(), set, HSK3);
        assert!(reopened.is_known("你好"), "progress lost for set {set:?}");
    }
    assert!(!open(dir.path(), "hsk3", HSK3).is_known("你好"));
}
