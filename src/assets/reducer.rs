use crate::action::AppAction;
use crate::mvi::Reducer;

use super::state::AssetsState;

pub struct AssetsReducer;

impl Reducer for AssetsReducer {
    type State = AssetsState;
    type Action = AppAction;

    fn reduce(&self, state: Self::State, action: &Self::Action) -> Self::State {
        match action {
            AppAction::FilterAssets { filter } => AssetsState {
                filter: filter.trim().to_string(),
                ..state
            },
            AppAction::SelectAssetTab { tab } if !tab.is_empty() => AssetsState {
                active_tab: tab.clone(),
                ..state
            },
            _ => state,
        }
    }
}
