//! Reducer trait.

use super::action::Action;
use super::state::SliceState;

/// Reducer transforms state based on actions.
///
/// The reducer is the only place where state transitions happen.
/// It must be a total, pure function: (State, &Action) -> State.
/// Actions it does not care about return the state unchanged.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: SliceState;

    /// The action type this reducer handles.
    type Action: Action;

    /// Process an action and return the new state.
    fn reduce(&self, state: Self::State, action: &Self::Action) -> Self::State;
}
