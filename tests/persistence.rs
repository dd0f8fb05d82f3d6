mod common;

use common::{comment, populated_state};
use scriptorium::persistence::{
    FileStorage, KeyValueStore, MemoryStorage, PersistenceError, StatePersistence,
    DEFAULT_STATE_KEY, SCHEMA_VERSION,
};
use scriptorium::store::{Action, AppState, ModalKind, SharedStore, Store};
use tempfile::TempDir;

/// Test that a state saved to FileStorage loads back equal.
#[test]
fn file_roundtrip_restores_domain_state() {
    let temp = TempDir::new().unwrap();
    let state = populated_state();

    let mut persistence =
        StatePersistence::new(FileStorage::open(temp.path()).unwrap(), DEFAULT_STATE_KEY);
    persistence.save(&state).unwrap();

    let reopened =
        StatePersistence::new(FileStorage::open(temp.path()).unwrap(), DEFAULT_STATE_KEY);
    assert_eq!(reopened.load().unwrap(), Some(state));
}

/// Test that the saved document is camelCase JSON carrying the schema version.
#[test]
fn saved_document_is_plain_json_with_version() {
    let storage = MemoryStorage::new();
    let mut persistence = StatePersistence::new(storage.clone(), "doc");
    persistence.save(&populated_state()).unwrap();

    let raw = storage.get("doc").unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["version"], SCHEMA_VERSION);
    assert_eq!(json["comments"]["c-a"]["isHidden"], false);
    assert!(json["chapters"][1]["commentIds"].is_array());
    assert!(json.get("activeModal").is_none());
}

/// Test that older documents without a version or events still load.
#[test]
fn documents_without_version_or_events_still_load() {
    let mut storage = MemoryStorage::new();
    storage
        .set(
            "legacy",
            r#"{
                "chapters": [{"id": "x", "title": "Old", "content": "", "commentIds": []}],
                "comments": {},
                "characters": [],
                "relationships": []
            }"#,
        )
        .unwrap();

    let state = StatePersistence::new(storage, "legacy").load().unwrap().unwrap();
    assert_eq!(state.chapters[0].title, "Old");
    assert!(state.events.is_empty());
}

/// Test that an attached store writes every change through.
#[test]
fn store_writes_through_and_reload_matches() {
    let temp = TempDir::new().unwrap();
    let storage = FileStorage::open(temp.path()).unwrap();

    let mut store = Store::new(AppState::initial());
    StatePersistence::new(storage.clone(), "novel").attach(&mut store);

    store.dispatch(Action::add_comment(
        scriptorium::store::DEFAULT_CHAPTER_ID,
        comment("c1", "first"),
    ));
    store.dispatch(Action::HideComment("c1".into()));
    // UI-only change still notifies, but reload ignores UI fields.
    store.dispatch(Action::open_modal(ModalKind::ChapterMetadata, None));

    let restored = StatePersistence::new(storage, "novel").load().unwrap().unwrap();
    assert!(restored.comments["c1"].is_hidden);
    assert_eq!(restored.active_modal, ModalKind::None);
    assert_eq!(restored.chapters, store.state().chapters);
}

/// Test that SharedStore clones and the saved document agree.
#[test]
fn shared_store_views_and_persistence_agree() {
    let storage = MemoryStorage::new();
    let mut store = Store::default();
    StatePersistence::new(storage.clone(), "k").attach(&mut store);
    let shared = SharedStore::new(store);

    let editor = shared.clone();
    editor.dispatch(Action::add_chapter(Some("Second".into())));

    let restored = StatePersistence::new(storage, "k").load().unwrap().unwrap();
    assert_eq!(restored.chapters, shared.snapshot().chapters);
}

#[test]
fn clear_removes_saved_state() {
    let temp = TempDir::new().unwrap();
    let mut persistence = StatePersistence::new(FileStorage::open(temp.path()).unwrap(), "k");
    persistence.save(&populated_state()).unwrap();
    persistence.clear().unwrap();
    assert_eq!(persistence.load_or_initial().unwrap(), AppState::initial());
}

/// Test that a key with path separators is refused.
#[test]
fn invalid_key_surfaces_as_error() {
    let temp = TempDir::new().unwrap();
    let mut persistence =
        StatePersistence::new(FileStorage::open(temp.path()).unwrap(), "../outside");
    assert!(matches!(
        persistence.save(&AppState::initial()),
        Err(PersistenceError::InvalidKey { .. })
    ));
}
