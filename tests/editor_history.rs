mod common;

use common::{add_diagram, add_item, document, harness, move_item, position, select_item, DIAGRAM};
use diagram_store::action::{ActionKind, AppAction};
use diagram_store::editor::{DiagramId, EditorState, ItemId};

fn present(harness: &common::Harness) -> &EditorState {
    harness.store.state().content()
}

fn past_states(harness: &common::Harness) -> Vec<EditorState> {
    harness
        .store
        .state()
        .editor
        .past()
        .iter()
        .map(|entry| entry.state.clone())
        .collect()
}

fn future_states(harness: &common::Harness) -> Vec<EditorState> {
    harness
        .store
        .state()
        .editor
        .future()
        .map(|entry| entry.state.clone())
        .collect()
}

#[test]
fn record_undo_redo_scenario() {
    let mut h = harness();
    let a = present(&h).clone();

    h.store.dispatch(add_diagram());
    let b = present(&h).clone();
    assert_eq!(past_states(&h), vec![a.clone()]);
    assert!(future_states(&h).is_empty());

    h.store.dispatch(AppAction::Undo);
    assert!(past_states(&h).is_empty());
    assert_eq!(present(&h), &a);
    assert_eq!(future_states(&h), vec![b.clone()]);

    h.store.dispatch(AppAction::Redo);
    assert_eq!(past_states(&h), vec![a]);
    assert_eq!(present(&h), &b);
    assert!(future_states(&h).is_empty());
}

#[test]
fn three_drags_make_one_undo_step() {
    let mut h = harness();
    h.store.dispatch(add_diagram());
    h.store.dispatch(add_item("box", 0.0, 0.0));
    let a = present(&h).clone();
    let depth = h.store.state().editor.past_len();

    for _ in 0..3 {
        h.store.dispatch(move_item("box", 10.0, 5.0));
    }

    assert_eq!(h.store.state().editor.past_len(), depth + 1);
    assert_eq!(h.store.state().editor.past().last().map(|e| &e.state), Some(&a));
    assert_eq!(position(present(&h), "box"), (30.0, 15.0));

    h.store.dispatch(AppAction::Undo);
    assert_eq!(present(&h), &a);
}

#[test]
fn drags_of_different_items_are_separate_steps() {
    let mut h = harness();
    h.store.dispatch(add_diagram());
    h.store.dispatch(add_item("a", 0.0, 0.0));
    h.store.dispatch(add_item("b", 0.0, 0.0));
    let depth = h.store.state().editor.past_len();

    h.store.dispatch(move_item("a", 1.0, 0.0));
    h.store.dispatch(move_item("b", 1.0, 0.0));

    assert_eq!(h.store.state().editor.past_len(), depth + 2);
}

#[test]
fn selection_is_not_an_undo_step() {
    let mut h = harness();
    h.store.dispatch(add_diagram());
    h.store.dispatch(add_item("box", 0.0, 0.0));
    h.store.dispatch(AppAction::Undo);
    let past = h.store.state().editor.past_len();
    let future = h.store.state().editor.future_len();

    h.store.dispatch(AppAction::SelectDiagram {
        diagram_id: Some(DIAGRAM.into()),
    });

    assert_eq!(h.store.state().editor.past_len(), past);
    assert_eq!(h.store.state().editor.future_len(), future);
    assert_eq!(present(&h).selected_diagram, Some(DiagramId::from(DIAGRAM)));
}

#[test]
fn selection_between_drags_keeps_them_merged() {
    let mut h = harness();
    h.store.dispatch(add_diagram());
    h.store.dispatch(add_item("box", 0.0, 0.0));
    h.store.dispatch(move_item("box", 1.0, 1.0));
    let depth = h.store.state().editor.past_len();

    h.store.dispatch(select_item("box"));
    h.store.dispatch(move_item("box", 1.0, 1.0));

    assert_eq!(h.store.state().editor.past_len(), depth);
    let diagram = present(&h).diagram(&DIAGRAM.into()).unwrap();
    assert!(diagram.selected.contains(&ItemId::from("box")));
    assert_eq!(position(present(&h), "box"), (2.0, 2.0));
}

#[test]
fn new_edit_after_undo_discards_redo() {
    let mut h = harness();
    h.store.dispatch(add_diagram());
    h.store.dispatch(add_item("a", 0.0, 0.0));
    h.store.dispatch(AppAction::Undo);
    assert!(h.store.state().editor.can_redo());

    h.store.dispatch(add_item("b", 0.0, 0.0));
    assert!(!h.store.state().editor.can_redo());
}

#[test]
fn undo_redo_on_empty_history_do_nothing() {
    let mut h = harness();
    let before = h.store.state().clone();
    h.store.dispatch(AppAction::Undo);
    h.store.dispatch(AppAction::Redo);
    assert_eq!(h.store.state(), &before);
}

#[test]
fn unhandled_edit_on_missing_diagram_is_recorded_as_noop() {
    let mut h = harness();
    h.store.dispatch(AppAction::BringToFront {
        diagram_id: "missing".into(),
        item_ids: vec![],
    });
    assert_eq!(h.store.state().editor.past_len(), 1);
    assert_eq!(present(&h), &EditorState::default());
}

#[test]
fn ui_actions_leave_history_alone() {
    let mut h = harness();
    h.store.dispatch(AppAction::SetZoom { zoom: 2.0 });
    h.store.dispatch(AppAction::FilterAssets {
        filter: "button".into(),
    });
    assert!(!h.store.state().editor.can_undo());
    assert_eq!(h.store.state().assets.filter, "button");
}

#[test]
fn load_succeeded_resets_history() {
    let mut h = harness();
    h.store.dispatch(add_diagram());
    h.store.dispatch(add_item("x", 0.0, 0.0));
    h.store.dispatch(add_item("y", 0.0, 0.0));
    h.store.dispatch(AppAction::Undo);
    assert!(h.store.state().editor.can_undo());
    assert!(h.store.state().editor.can_redo());

    let c = document("loaded");
    h.store.dispatch(AppAction::LoadSucceeded {
        state: c.clone(),
        read_token: "doc".into(),
        write_token: None,
        navigate: false,
    });

    assert!(past_states(&h).is_empty());
    assert!(future_states(&h).is_empty());
    assert_eq!(present(&h), &c);
}

#[test]
fn load_failed_keeps_history_and_reports() {
    let mut h = harness();
    h.store.dispatch(add_diagram());
    h.store.dispatch(add_item("x", 0.0, 0.0));
    h.store.dispatch(AppAction::Undo);
    let editor = h.store.state().editor.clone();

    h.store.dispatch(AppAction::LoadStarted {
        read_token: "doc".into(),
    });
    h.store.dispatch(AppAction::LoadFailed {
        error: "not found".into(),
    });

    assert_eq!(h.store.state().editor, editor);
    assert_eq!(h.store.state().loading.error(), Some("not found"));
}

#[test]
fn new_diagram_starts_clean() {
    let mut h = harness();
    h.store.dispatch(add_diagram());
    h.store.dispatch(AppAction::NewDiagram { navigate: false });
    assert!(!h.store.state().editor.can_undo());
    assert_eq!(present(&h), &EditorState::default());
}

#[test]
fn edits_after_reset_are_recorded_from_loaded_content() {
    let mut h = harness();
    let c = document("box");
    h.store.dispatch(AppAction::LoadSucceeded {
        state: c.clone(),
        read_token: "doc".into(),
        write_token: None,
        navigate: false,
    });
    h.store.dispatch(move_item("box", 3.0, 4.0));
    h.store.dispatch(AppAction::Undo);
    assert_eq!(present(&h), &c);
}

#[test]
fn drag_after_undo_merges_into_restored_drag() {
    let mut h = harness();
    h.store.dispatch(add_diagram());
    h.store.dispatch(add_item("box", 0.0, 0.0));
    h.store.dispatch(move_item("box", 10.0, 0.0));
    h.store.dispatch(add_item("other", 0.0, 0.0));
    h.store.dispatch(AppAction::Undo);

    let restored = h.store.state().editor.present_entry().last_action_kind();
    assert_eq!(restored, Some(ActionKind::MoveItems));
    let depth = h.store.state().editor.past_len();

    h.store.dispatch(move_item("box", 5.0, 0.0));

    assert_eq!(h.store.state().editor.past_len(), depth);
    assert!(!h.store.state().editor.can_redo());
    assert_eq!(position(present(&h), "box"), (15.0, 0.0));
}
