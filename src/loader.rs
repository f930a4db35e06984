//! Asynchronous document loading and saving.
//!
//! The I/O happens outside of any dispatch; the results re-enter the store
//! as ordinary actions.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::action::AppAction;
use crate::editor::EditorState;
use crate::store::{RootReducer, SharedStore};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read document '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse document '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode document: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Failed to write document '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Token a document is addressed by: its file stem.
pub fn document_token(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Loads the JSON document at `path` into the store.
///
/// Dispatches `LoadStarted`, then exactly one of `LoadSucceeded` or
/// `LoadFailed`. The error is also returned to the caller.
pub async fn load_document(
    store: &SharedStore<RootReducer>,
    path: &Path,
    navigate: bool,
) -> Result<(), LoadError> {
    let token = document_token(path);
    store.dispatch(AppAction::LoadStarted {
        read_token: token.clone(),
    });

    match read_document(path).await {
        Ok(state) => {
            tracing::info!(path = %path.display(), diagrams = state.diagrams.len(), "Document loaded");
            store.dispatch(AppAction::LoadSucceeded {
                state,
                write_token: Some(token.clone()),
                read_token: token,
                navigate,
            });
            Ok(())
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "Document load failed");
            store.dispatch(AppAction::LoadFailed {
                error: err.to_string(),
            });
            Err(err)
        }
    }
}

async fn read_document(path: &Path) -> Result<EditorState, LoadError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| LoadError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
    serde_json::from_str(&content).map_err(|e| LoadError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Writes the present editor content to `path` as JSON.
///
/// Dispatches `SaveSucceeded` or `SaveFailed`.
pub async fn save_document(
    store: &SharedStore<RootReducer>,
    path: &Path,
    navigate: bool,
) -> Result<(), LoadError> {
    let content = store.with_state(|state| state.content().clone());

    match write_document(path, &content).await {
        Ok(()) => {
            let token = document_token(path);
            tracing::info!(path = %path.display(), "Document saved");
            store.dispatch(AppAction::SaveSucceeded {
                read_token: token.clone(),
                write_token: token,
                navigate,
            });
            Ok(())
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "Document save failed");
            store.dispatch(AppAction::SaveFailed {
                error: err.to_string(),
            });
            Err(err)
        }
    }
}

async fn write_document(path: &Path, content: &EditorState) -> Result<(), LoadError> {
    let json = serde_json::to_string_pretty(content)?;
    tokio::fs::write(path, json)
        .await
        .map_err(|e| LoadError::Write {
            path: path.to_path_buf(),
            source: e,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_is_file_stem() {
        assert_eq!(document_token(Path::new("/tmp/docs/abc123.json")), "abc123");
    }
}
