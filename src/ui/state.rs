use crate::mvi::SliceState;

pub const MIN_ZOOM: f64 = 0.25;
pub const MAX_ZOOM: f64 = 4.0;

#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    pub zoom: f64,
    pub sidebar_visible: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            sidebar_visible: true,
        }
    }
}

impl SliceState for UiState {}
