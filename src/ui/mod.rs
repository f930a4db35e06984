//! UI-only state: zoom level and sidebar visibility.

mod reducer;
mod state;

pub use reducer::UiReducer;
pub use state::{UiState, MAX_ZOOM, MIN_ZOOM};
