mod common;

use std::sync::Arc;

use parking_lot::Mutex;

use common::{add_diagram, document, harness};
use diagram_store::action::AppAction;
use diagram_store::config::Config;
use diagram_store::observers::{
    MemoryRouter, ObserverError, RouterHistory, Toast, ToastLog, ToastSink,
};
use diagram_store::store::{configure_store, RootState};

/// Sink whose every call fails.
struct BrokenToasts;

impl ToastSink for BrokenToasts {
    fn show(&self, _toast: Toast) -> Result<(), ObserverError> {
        Err(ObserverError::Notification("toast area unmounted".into()))
    }
}

/// Router that panics on use and records nothing.
struct PanickingRouter;

impl RouterHistory for PanickingRouter {
    fn push(&mut self, path: &str) -> Result<(), ObserverError> {
        panic!("router gone while pushing {path}");
    }

    fn replace(&mut self, path: &str) -> Result<(), ObserverError> {
        panic!("router gone while replacing {path}");
    }
}

fn loaded(token: &str, navigate: bool) -> AppAction {
    AppAction::LoadSucceeded {
        state: document("box"),
        read_token: token.into(),
        write_token: Some(token.into()),
        navigate,
    }
}

#[test]
fn load_then_save_navigates_and_notifies() {
    let mut h = harness();
    h.store.dispatch(loaded("abc", true));
    assert_eq!(h.router.location(), "/abc");

    h.store.dispatch(AppAction::SaveSucceeded {
        read_token: "def".into(),
        write_token: "def".into(),
        navigate: true,
    });

    assert_eq!(h.router.entries(), vec!["/".to_string(), "/def".to_string()]);
    assert_eq!(h.toasts.toasts(), vec![Toast::info("Diagram saved.")]);
}

#[test]
fn load_without_navigate_keeps_location() {
    let mut h = harness();
    h.store.dispatch(loaded("abc", false));
    assert_eq!(h.router.location(), "/");
}

#[test]
fn new_diagram_navigates_to_base_path() {
    let mut config = Config::default();
    config.navigation.base_path = "/editor/".into();
    let mut h = common::harness_with(&config);

    h.store.dispatch(loaded("abc", true));
    h.store.dispatch(AppAction::NewDiagram { navigate: true });

    assert_eq!(
        h.router.entries(),
        vec!["/".to_string(), "/editor/abc".to_string(), "/editor/".to_string()]
    );
}

#[test]
fn load_failure_produces_error_toast() {
    let mut h = harness();
    let failures = h.store.dispatch(AppAction::LoadFailed {
        error: "404".into(),
    });
    assert!(failures.is_empty());
    assert_eq!(
        h.toasts.toasts(),
        vec![Toast::error("Failed to load diagram: 404")]
    );
}

#[test]
fn failing_toast_does_not_block_navigation() {
    let router = MemoryRouter::default();
    let mut store = configure_store(&Config::default(), BrokenToasts, router.clone());

    let failures = store.dispatch(AppAction::SaveSucceeded {
        read_token: "doc".into(),
        write_token: "doc".into(),
        navigate: true,
    });

    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].observer, "toast");
    assert_eq!(router.location(), "/doc");
}

#[test]
fn panicking_router_leaves_state_committed() {
    let toasts = ToastLog::new();
    let mut store = configure_store(&Config::default(), toasts.clone(), PanickingRouter);

    let failures = store.dispatch(AppAction::SaveSucceeded {
        read_token: "doc".into(),
        write_token: "doc".into(),
        navigate: true,
    });

    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].observer, "navigation");
    assert!(failures[0].error.contains("router gone"));
    assert_eq!(toasts.toasts(), vec![Toast::info("Diagram saved.")]);
    assert_eq!(store.state().loading.write_token.as_deref(), Some("doc"));

    // The store keeps working after the panic.
    store.dispatch(add_diagram());
    assert!(store.state().editor.can_undo());
}

#[test]
fn subscribers_run_after_observers() {
    let mut h = harness();
    let router = h.router.clone();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    h.store
        .subscribe(move |state: &RootState| sink.lock().push((router.location(), state.content().diagrams.len())));

    h.store.dispatch(loaded("abc", true));

    assert_eq!(*seen.lock(), vec![("/abc".to_string(), 1)]);
}
