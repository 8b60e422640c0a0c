use std::sync::Arc;

use akademik_lib::models::{HistoryKind, NewHistoryItem};
use akademik_lib::services::file_service::FileStore;
use akademik_lib::services::history_service::{HISTORY_CAPACITY, HistoryStore, KvHistoryStore};

fn file_history(dir: &std::path::Path) -> KvHistoryStore {
    KvHistoryStore::new(Arc::new(FileStore::new(dir)))
}

#[test]
fn history_survives_reopening_the_store() {
    let dir = tempfile::tempdir().unwrap();
    let saved = file_history(dir.path())
        .append(
            NewHistoryItem::new(HistoryKind::Translate, "Hello...", "Merhaba...")
                .with_full_content("Merhaba dünya"),
        )
        .unwrap();

    let reopened = file_history(dir.path());
    assert_eq!(reopened.list(), vec![saved]);
}

#[test]
fn capacity_holds_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let history = file_history(dir.path());
    for n in 0..(HISTORY_CAPACITY + 7) {
        history.append(NewHistoryItem::new(HistoryKind::Edit, format!("t{n}"), "p"));
    }

    let items = file_history(dir.path()).list();
    assert_eq!(items.len(), HISTORY_CAPACITY);
    assert_eq!(items[0].title, format!("t{}", HISTORY_CAPACITY + 6));
    assert!(items.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
}

#[test]
fn corrupt_file_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("academic_assistant_history.json"), "not json at all").unwrap();

    let history = file_history(dir.path());
    assert!(history.list().is_empty());

    history.append(NewHistoryItem::new(HistoryKind::Chat, "Sohbet: x...", "y"));
    assert_eq!(history.list().len(), 1);
}

#[test]
fn clear_removes_the_slot() {
    let dir = tempfile::tempdir().unwrap();
    let history = file_history(dir.path());
    history.append(NewHistoryItem::new(HistoryKind::Chat, "a", "b"));
    history.clear();

    assert!(history.list().is_empty());
    assert!(!dir.path().join("academic_assistant_history.json").exists());
}
