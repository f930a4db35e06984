use std::sync::Arc;

use parking_lot::Mutex;

use crate::action::AppAction;
use crate::store::RootState;

use super::{Observer, ObserverError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
}

impl Toast {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Error,
            message: message.into(),
        }
    }
}

/// Notification surface, e.g. the toast area of the editor window.
pub trait ToastSink: Send {
    fn show(&self, toast: Toast) -> Result<(), ObserverError>;
}

/// In-memory sink. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct ToastLog {
    toasts: Arc<Mutex<Vec<Toast>>>,
}

impl ToastLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.lock().clone()
    }
}

impl ToastSink for ToastLog {
    fn show(&self, toast: Toast) -> Result<(), ObserverError> {
        self.toasts.lock().push(toast);
        Ok(())
    }
}

/// Sink that reports toasts through `tracing`; used by the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingToasts;

impl ToastSink for TracingToasts {
    fn show(&self, toast: Toast) -> Result<(), ObserverError> {
        match toast.level {
            ToastLevel::Info => tracing::info!(target: "toast", "{}", toast.message),
            ToastLevel::Error => tracing::error!(target: "toast", "{}", toast.message),
        }
        Ok(())
    }
}

/// Turns content lifecycle actions into notifications.
pub struct ToastObserver {
    sink: Box<dyn ToastSink>,
}

impl ToastObserver {
    pub fn new(sink: impl ToastSink + 'static) -> Self {
        Self {
            sink: Box::new(sink),
        }
    }

    fn toast_for(action: &AppAction) -> Option<Toast> {
        match action {
            AppAction::LoadFailed { error } => {
                Some(Toast::error(format!("Failed to load diagram: {error}")))
            }
            AppAction::SaveSucceeded { .. } => Some(Toast::info("Diagram saved.")),
            AppAction::SaveFailed { error } => {
                Some(Toast::error(format!("Failed to save diagram: {error}")))
            }
            _ => None,
        }
    }
}

impl Observer<RootState, AppAction> for ToastObserver {
    fn name(&self) -> &'static str {
        "toast"
    }

    fn observe(&mut self, action: &AppAction, _state: &RootState) -> Result<(), ObserverError> {
        match Self::toast_for(action) {
            Some(toast) => self.sink.show(toast),
            None => Ok(()),
        }
    }
}
