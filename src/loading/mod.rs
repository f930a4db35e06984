//! Document loading: the `loading` slice and the history reset gate.

mod reducer;
mod reset;
mod state;

pub use reducer::LoadingReducer;
pub use reset::LoadingReset;
pub use state::{LoadStatus, LoadingState};

use crate::mvi::Action;

/// What a content lifecycle action means for the editor history.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentSignal<S> {
    /// New content replaces everything; history starts over.
    Loaded(S),
    /// The load attempt failed; history must stay untouched.
    Failed,
}

/// Actions that can carry content lifecycle signals.
pub trait ContentAction<S>: Action {
    fn content_signal(&self) -> Option<ContentSignal<S>>;
}
