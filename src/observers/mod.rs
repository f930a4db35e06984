//! Side-effect observers run after every dispatch.
//!
//! Observers see the action and the already committed state, read-only.
//! They never feed back into reducers; asynchronous follow-ups re-enter the
//! store as new actions.

mod navigation;
mod toast;

pub use navigation::{MemoryRouter, NavigationObserver, RouterHistory};
pub use toast::{Toast, ToastLevel, ToastLog, ToastObserver, ToastSink, TracingToasts};

use std::panic::{self, AssertUnwindSafe};

use thiserror::Error;

/// Errors raised by observers and the collaborators they drive.
#[derive(Debug, Error)]
pub enum ObserverError {
    #[error("Failed to show notification: {0}")]
    Notification(String),

    #[error("Navigation to '{path}' failed: {reason}")]
    Navigation { path: String, reason: String },
}

/// Side-effect-only subscriber.
pub trait Observer<S, A>: Send {
    /// Name used in logs when the observer fails.
    fn name(&self) -> &'static str;

    fn observe(&mut self, action: &A, state: &S) -> Result<(), ObserverError>;
}

/// One observer failure captured by the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct ObserverFailure {
    pub observer: &'static str,
    pub error: String,
}

/// Ordered list of observers.
///
/// Failures are isolated: an error or a panic in one observer is logged and
/// the remaining observers still run.
pub struct Pipeline<S, A> {
    observers: Vec<Box<dyn Observer<S, A>>>,
}

impl<S, A> Default for Pipeline<S, A> {
    fn default() -> Self {
        Self {
            observers: Vec::new(),
        }
    }
}

impl<S, A> Pipeline<S, A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an observer; observers run in registration order.
    pub fn with(mut self, observer: impl Observer<S, A> + 'static) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.observers.iter().map(|observer| observer.name()).collect()
    }

    /// Runs every observer and returns the failures.
    pub fn run(&mut self, action: &A, state: &S) -> Vec<ObserverFailure> {
        let mut failures = Vec::new();
        for observer in &mut self.observers {
            let name = observer.name();
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| observer.observe(action, state)));
            let error = match outcome {
                Ok(Ok(())) => continue,
                Ok(Err(err)) => err.to_string(),
                Err(payload) => panic_message(payload.as_ref()),
            };
            tracing::warn!(observer = name, %error, "Observer failed");
            failures.push(ObserverFailure {
                observer: name,
                error,
            });
        }
        failures
    }
}

pub(crate) fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        format!("panicked: {message}")
    } else if let Some(message) = payload.downcast_ref::<String>() {
        format!("panicked: {message}")
    } else {
        "panicked".to_string()
    }
}
