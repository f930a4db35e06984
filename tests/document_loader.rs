mod common;

use std::fs;

use tempfile::TempDir;

use common::{add_diagram, add_item, document, harness};
use diagram_store::loader::{load_document, save_document, LoadError};
use diagram_store::loading::LoadStatus;
use diagram_store::observers::Toast;
use diagram_store::store::SharedStore;

#[tokio::test]
async fn load_replaces_content_and_clears_history() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("abc.json");
    let doc = document("box");
    fs::write(&path, serde_json::to_string(&doc).unwrap()).unwrap();

    let h = harness();
    let router = h.router.clone();
    let store = SharedStore::new(h.store);
    store.dispatch(add_diagram());
    assert!(store.with_state(|s| s.editor.can_undo()));

    load_document(&store, &path, true).await.unwrap();

    let state = store.snapshot();
    assert_eq!(state.content(), &doc);
    assert!(!state.editor.can_undo());
    assert_eq!(state.loading.status, LoadStatus::Loaded);
    assert_eq!(state.loading.read_token.as_deref(), Some("abc"));
    assert_eq!(router.location(), "/abc");
}

#[tokio::test]
async fn missing_document_reports_failure_and_keeps_history() {
    let dir = TempDir::new().unwrap();
    let h = harness();
    let toasts = h.toasts.clone();
    let store = SharedStore::new(h.store);
    store.dispatch(add_diagram());

    let err = load_document(&store, &dir.path().join("nope.json"), true)
        .await
        .unwrap_err();
    assert!(matches!(err, LoadError::Read { .. }));

    let state = store.snapshot();
    assert!(state.editor.can_undo());
    assert!(state.loading.error().is_some());
    assert_eq!(toasts.toasts().len(), 1);
}

#[tokio::test]
async fn malformed_document_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, "{ not json").unwrap();
    let store = SharedStore::new(harness().store);

    let err = load_document(&store, &path, false).await.unwrap_err();
    assert!(matches!(err, LoadError::Parse { .. }));
}

#[tokio::test]
async fn save_writes_json_and_updates_tokens() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("saved.json");
    let h = harness();
    let toasts = h.toasts.clone();
    let store = SharedStore::new(h.store);
    store.dispatch(add_diagram());
    store.dispatch(add_item("box", 5.0, 5.0));

    save_document(&store, &path, false).await.unwrap();

    let written: diagram_store::editor::EditorState =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let state = store.snapshot();
    assert_eq!(&written, state.content());
    assert_eq!(state.loading.write_token.as_deref(), Some("saved"));
    assert_eq!(state.editor.past_len(), 2);
    assert_eq!(toasts.toasts(), vec![Toast::info("Diagram saved.")]);
}

#[tokio::test]
async fn save_into_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("doc.json");
    let h = harness();
    let toasts = h.toasts.clone();
    let store = SharedStore::new(h.store);

    let err = save_document(&store, &path, false).await.unwrap_err();
    assert!(matches!(err, LoadError::Write { .. }));
    assert_eq!(toasts.toasts().len(), 1);
}
