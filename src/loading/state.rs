use crate::mvi::SliceState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed {
        error: String,
    },
}

/// Status of the document currently open in the editor.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoadingState {
    pub status: LoadStatus,
    /// Token the document was read from (shared view link).
    pub read_token: Option<String>,
    /// Token needed to overwrite the document. Absent for read-only copies.
    pub write_token: Option<String>,
}

impl SliceState for LoadingState {}

impl LoadingState {
    pub fn is_loading(&self) -> bool {
        matches!(self.status, LoadStatus::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            LoadStatus::Failed { error } => Some(error),
            _ => None,
        }
    }
}
