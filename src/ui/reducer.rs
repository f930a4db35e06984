use crate::action::AppAction;
use crate::mvi::Reducer;

use super::state::{UiState, MAX_ZOOM, MIN_ZOOM};

pub struct UiReducer;

impl Reducer for UiReducer {
    type State = UiState;
    type Action = AppAction;

    fn reduce(&self, state: Self::State, action: &Self::Action) -> Self::State {
        match action {
            AppAction::SetZoom { zoom } if zoom.is_finite() => UiState {
                zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
                ..state
            },
            AppAction::ToggleSidebar => UiState {
                sidebar_visible: !state.sidebar_visible,
                ..state
            },
            _ => state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_is_clamped() {
        let state = UiReducer.reduce(UiState::default(), &AppAction::SetZoom { zoom: 10.0 });
        assert_eq!(state.zoom, MAX_ZOOM);
        let state = UiReducer.reduce(state, &AppAction::SetZoom { zoom: 0.0 });
        assert_eq!(state.zoom, MIN_ZOOM);
    }

    #[test]
    fn non_finite_zoom_is_ignored() {
        let state = UiReducer.reduce(UiState::default(), &AppAction::SetZoom { zoom: f64::NAN });
        assert_eq!(state, UiState::default());
    }

    #[test]
    fn toggle_sidebar_flips() {
        let state = UiReducer.reduce(UiState::default(), &AppAction::ToggleSidebar);
        assert!(!state.sidebar_visible);
        assert!(UiReducer.reduce(state, &AppAction::ToggleSidebar).sidebar_visible);
    }
}
