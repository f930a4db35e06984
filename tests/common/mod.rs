//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use diagram_store::action::AppAction;
use diagram_store::config::Config;
use diagram_store::editor::{Bounds, DiagramId, EditorState, ItemId};
use diagram_store::observers::{MemoryRouter, ToastLog};
use diagram_store::store::{configure_store, RootReducer, Store};

pub const DIAGRAM: &str = "main";

/// Store with in-memory collaborators the test can inspect.
pub struct Harness {
    pub store: Store<RootReducer>,
    pub toasts: ToastLog,
    pub router: MemoryRouter,
}

pub fn harness() -> Harness {
    harness_with(&Config::default())
}

pub fn harness_with(config: &Config) -> Harness {
    let toasts = ToastLog::new();
    let router = MemoryRouter::default();
    let store = configure_store(config, toasts.clone(), router.clone());
    Harness {
        store,
        toasts,
        router,
    }
}

pub fn add_diagram() -> AppAction {
    AppAction::AddDiagram {
        diagram_id: DIAGRAM.into(),
    }
}

pub fn add_item(id: &str, x: f64, y: f64) -> AppAction {
    AppAction::AddItem {
        diagram_id: DIAGRAM.into(),
        item_id: id.into(),
        shape: "Rectangle".into(),
        bounds: Bounds::new(x, y, 100.0, 40.0),
    }
}

pub fn move_item(id: &str, dx: f64, dy: f64) -> AppAction {
    AppAction::MoveItems {
        diagram_id: DIAGRAM.into(),
        item_ids: vec![id.into()],
        dx,
        dy,
    }
}

pub fn select_item(id: &str) -> AppAction {
    AppAction::SelectItems {
        diagram_id: DIAGRAM.into(),
        item_ids: vec![id.into()],
    }
}

pub fn position(state: &EditorState, id: &str) -> (f64, f64) {
    let item = state
        .item(&DiagramId::from(DIAGRAM), &ItemId::from(id))
        .expect("item exists");
    (item.bounds.x, item.bounds.y)
}

/// Document with one diagram holding one item.
pub fn document(item: &str) -> EditorState {
    let mut harness = harness();
    harness.store.dispatch(add_diagram());
    harness.store.dispatch(add_item(item, 0.0, 0.0));
    harness.store.state().content().clone()
}
