//! Reducer that records a domain reducer's transitions into a [`History`].

use crate::mvi::{Action, Reducer, SliceState};

use super::container::History;
use super::exclusion::ExclusionFilter;
use super::merge::ActionMerger;
use super::{HistoryAction, HistoryCommand};

/// Wraps a domain reducer with undo/redo bookkeeping.
///
/// Recording an action:
/// 1. Excluded kind: the domain reducer runs on the present state, stacks and
///    the present action tag stay as they are.
/// 2. The merger accepts `(present action, incoming)`: the present entry is
///    replaced in place and the redo stack is cleared.
/// 3. Otherwise the present entry is pushed onto the undo stack.
pub struct Undoable<R: Reducer, M> {
    inner: R,
    merger: M,
    exclusions: ExclusionFilter<<R::Action as Action>::Kind>,
    max_depth: Option<usize>,
}

impl<R, M> Undoable<R, M>
where
    R: Reducer,
    R::Action: HistoryAction,
    M: ActionMerger<R::Action>,
{
    pub fn new(
        inner: R,
        merger: M,
        exclusions: ExclusionFilter<<R::Action as Action>::Kind>,
    ) -> Self {
        Self {
            inner,
            merger,
            exclusions,
            max_depth: None,
        }
    }

    /// Caps the undo stack. `None` keeps it unbounded.
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    fn record(
        &self,
        mut history: History<R::State, R::Action>,
        action: &R::Action,
    ) -> History<R::State, R::Action> {
        let kind = action.kind();
        let next = self.inner.reduce(history.present().clone(), action);

        if self.exclusions.is_excluded(kind) {
            tracing::trace!(?kind, "Excluded from history");
            history.replace_present_state(next);
            return history;
        }

        let merge = history
            .merge_candidate()
            .is_some_and(|previous| self.merger.should_merge(previous, action));

        if merge {
            tracing::trace!(?kind, "Merged into present entry");
            history.merge(next, action.clone());
        } else {
            tracing::trace!(?kind, depth = history.past_len() + 1, "Recorded history entry");
            history.push(next, action.clone(), self.max_depth);
        }
        history
    }
}

impl<R, M> Reducer for Undoable<R, M>
where
    R: Reducer,
    R::Action: HistoryAction + PartialEq,
    M: ActionMerger<R::Action>,
    History<R::State, R::Action>: SliceState,
{
    type State = History<R::State, R::Action>;
    type Action = R::Action;

    fn reduce(&self, mut state: Self::State, action: &Self::Action) -> Self::State {
        match action.history_command() {
            Some(HistoryCommand::Undo) => {
                if !state.undo() {
                    tracing::trace!("Nothing to undo");
                }
                state
            }
            Some(HistoryCommand::Redo) => {
                if !state.redo() {
                    tracing::trace!("Nothing to redo");
                }
                state
            }
            None => self.record(state, action),
        }
    }
}
