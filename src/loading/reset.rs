//! Gate in front of the history reducer for content reloads.

use crate::history::History;
use crate::mvi::{Reducer, SliceState};

use super::{ContentAction, ContentSignal};

/// Wraps a history reducer and intercepts content lifecycle actions.
///
/// - [`ContentSignal::Loaded`]: history is reset to the new content.
/// - [`ContentSignal::Failed`]: history is returned untouched.
/// - Anything else is delegated to the wrapped reducer unchanged.
///
/// This is the only place a [`History`] is ever reset.
pub struct LoadingReset<R> {
    inner: R,
}

impl<R> LoadingReset<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

impl<R, S, A> Reducer for LoadingReset<R>
where
    R: Reducer<State = History<S, A>, Action = A>,
    A: ContentAction<S> + PartialEq,
    S: SliceState,
{
    type State = History<S, A>;
    type Action = A;

    fn reduce(&self, mut state: Self::State, action: &Self::Action) -> Self::State {
        match action.content_signal() {
            Some(ContentSignal::Loaded(content)) => {
                tracing::info!(
                    discarded_undo = state.past_len(),
                    discarded_redo = state.future_len(),
                    "Content loaded, history reset"
                );
                state.reset(content);
                state
            }
            Some(ContentSignal::Failed) => {
                tracing::warn!("Content load failed, history kept");
                state
            }
            None => self.inner.reduce(state, action),
        }
    }
}
