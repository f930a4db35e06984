//! Past/present/future state container.

use std::collections::VecDeque;
use std::fmt;

use crate::mvi::{Action, SliceState};

/// Snapshot of domain state tagged with the action that produced it.
///
/// `action` is `None` for the initial entry and for entries created by a
/// reset, so they are never merge candidates.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry<S, A> {
    pub state: S,
    pub action: Option<A>,
}

impl<S, A: Action> HistoryEntry<S, A> {
    pub fn new(state: S, action: Option<A>) -> Self {
        Self { state, action }
    }

    pub fn last_action_kind(&self) -> Option<A::Kind> {
        self.action.as_ref().map(Action::kind)
    }
}

/// Linear undo/redo history.
///
/// - `past` is oldest first.
/// - `future` is most recently undone first and only non-empty after an undo.
///
/// The mutators below are the raw transitions; the decision between them is
/// taken by [`Undoable`](super::Undoable).
#[derive(Clone, PartialEq)]
pub struct History<S, A> {
    past: Vec<HistoryEntry<S, A>>,
    present: HistoryEntry<S, A>,
    future: VecDeque<HistoryEntry<S, A>>,
}

impl<S, A: Action> History<S, A> {
    pub fn new(initial: S) -> Self {
        Self {
            past: Vec::new(),
            present: HistoryEntry::new(initial, None),
            future: VecDeque::new(),
        }
    }

    pub fn present(&self) -> &S {
        &self.present.state
    }

    pub fn present_entry(&self) -> &HistoryEntry<S, A> {
        &self.present
    }

    /// Past entries, oldest first.
    pub fn past(&self) -> &[HistoryEntry<S, A>] {
        &self.past
    }

    /// Future entries, most recently undone first.
    pub fn future(&self) -> impl ExactSizeIterator<Item = &HistoryEntry<S, A>> {
        self.future.iter()
    }

    pub fn past_len(&self) -> usize {
        self.past.len()
    }

    pub fn future_len(&self) -> usize {
        self.future.len()
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Action that produced the present entry. After an undo or redo this is
    /// the tag of the restored entry, which can still absorb the next action.
    pub fn merge_candidate(&self) -> Option<&A> {
        self.present.action.as_ref()
    }

    /// Pushes the present entry onto `past` and makes `state` the present.
    ///
    /// When `max_depth` is set the oldest entries beyond it are dropped.
    pub fn push(&mut self, state: S, action: A, max_depth: Option<usize>) {
        let previous = std::mem::replace(&mut self.present, HistoryEntry::new(state, Some(action)));
        self.past.push(previous);
        if let Some(max) = max_depth {
            let overflow = self.past.len().saturating_sub(max);
            if overflow > 0 {
                self.past.drain(..overflow);
            }
        }
        self.future.clear();
    }

    /// Replaces the present entry in place.
    pub fn merge(&mut self, state: S, action: A) {
        self.present = HistoryEntry::new(state, Some(action));
        self.future.clear();
    }

    /// Replaces the present state without touching stacks or the action tag.
    pub fn replace_present_state(&mut self, state: S) {
        self.present.state = state;
    }

    /// Steps back one entry. Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.past.pop() else {
            return false;
        };
        let current = std::mem::replace(&mut self.present, previous);
        self.future.push_front(current);
        true
    }

    /// Steps forward one entry. Returns `false` when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.future.pop_front() else {
            return false;
        };
        let current = std::mem::replace(&mut self.present, next);
        self.past.push(current);
        true
    }

    /// Drops all history and starts over from `state`.
    pub fn reset(&mut self, state: S) {
        self.past.clear();
        self.future.clear();
        self.present = HistoryEntry::new(state, None);
    }
}

impl<S: Default, A: Action> Default for History<S, A> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S, A> SliceState for History<S, A>
where
    S: SliceState,
    A: Action + PartialEq,
{
}

impl<S, A> fmt::Debug for History<S, A>
where
    S: fmt::Debug,
    A: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("History")
            .field("past", &self.past.len())
            .field("present", &self.present)
            .field("future", &self.future.len())
            .finish()
    }
}
