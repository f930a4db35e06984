use std::sync::Arc;

use parking_lot::Mutex;

use crate::action::AppAction;
use crate::store::RootState;

use super::{Observer, ObserverError};

/// Browser-style navigation history.
pub trait RouterHistory: Send {
    fn push(&mut self, path: &str) -> Result<(), ObserverError>;
    fn replace(&mut self, path: &str) -> Result<(), ObserverError>;
}

/// In-process router history. Clones share the same entries.
#[derive(Debug, Clone)]
pub struct MemoryRouter {
    inner: Arc<Mutex<MemoryRouterInner>>,
}

#[derive(Debug)]
struct MemoryRouterInner {
    entries: Vec<String>,
    index: usize,
}

impl MemoryRouter {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(MemoryRouterInner {
                entries: vec![initial.into()],
                index: 0,
            })),
        }
    }

    pub fn location(&self) -> String {
        let inner = self.inner.lock();
        inner.entries[inner.index].clone()
    }

    pub fn entries(&self) -> Vec<String> {
        self.inner.lock().entries.clone()
    }
}

impl Default for MemoryRouter {
    fn default() -> Self {
        Self::new("/")
    }
}

impl RouterHistory for MemoryRouter {
    fn push(&mut self, path: &str) -> Result<(), ObserverError> {
        let mut inner = self.inner.lock();
        let next = inner.index + 1;
        inner.entries.truncate(next);
        inner.entries.push(path.to_string());
        inner.index = next;
        Ok(())
    }

    fn replace(&mut self, path: &str) -> Result<(), ObserverError> {
        let mut inner = self.inner.lock();
        let index = inner.index;
        inner.entries[index] = path.to_string();
        Ok(())
    }
}

/// Keeps the router location in sync with the open document.
pub struct NavigationObserver {
    router: Box<dyn RouterHistory>,
    base_path: String,
}

impl NavigationObserver {
    /// `base_path` must start and end with `/`.
    pub fn new(router: impl RouterHistory + 'static, base_path: impl Into<String>) -> Self {
        Self {
            router: Box::new(router),
            base_path: base_path.into(),
        }
    }

    fn document_path(&self, read_token: &str) -> String {
        format!("{}{}", self.base_path, read_token)
    }
}

impl Observer<RootState, AppAction> for NavigationObserver {
    fn name(&self) -> &'static str {
        "navigation"
    }

    fn observe(&mut self, action: &AppAction, _state: &RootState) -> Result<(), ObserverError> {
        match action {
            AppAction::LoadSucceeded {
                read_token,
                navigate: true,
                ..
            } => {
                let path = self.document_path(read_token);
                self.router.push(&path)
            }
            AppAction::SaveSucceeded {
                read_token,
                navigate: true,
                ..
            } => {
                let path = self.document_path(read_token);
                self.router.replace(&path)
            }
            AppAction::NewDiagram { navigate: true } => {
                let path = self.base_path.clone();
                self.router.push(&path)
            }
            _ => Ok(()),
        }
    }
}
