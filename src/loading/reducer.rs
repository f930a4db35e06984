use crate::action::AppAction;
use crate::mvi::Reducer;

use super::state::{LoadStatus, LoadingState};

/// Reducer for the `loading` slice.
pub struct LoadingReducer;

impl Reducer for LoadingReducer {
    type State = LoadingState;
    type Action = AppAction;

    fn reduce(&self, state: Self::State, action: &Self::Action) -> Self::State {
        match action {
            AppAction::LoadStarted { read_token } => LoadingState {
                status: LoadStatus::Loading,
                read_token: Some(read_token.clone()),
                ..state
            },
            AppAction::LoadSucceeded {
                read_token,
                write_token,
                ..
            } => LoadingState {
                status: LoadStatus::Loaded,
                read_token: Some(read_token.clone()),
                write_token: write_token.clone(),
            },
            // Tokens of the previously open document stay valid.
            AppAction::LoadFailed { error } => LoadingState {
                status: LoadStatus::Failed {
                    error: error.clone(),
                },
                ..state
            },
            AppAction::NewDiagram { .. } => LoadingState::default(),
            AppAction::SaveSucceeded {
                read_token,
                write_token,
                ..
            } => LoadingState {
                read_token: Some(read_token.clone()),
                write_token: Some(write_token.clone()),
                ..state
            },
            _ => state,
        }
    }
}
