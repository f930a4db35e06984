//! Undo/redo history layered over an arbitrary domain reducer.
//!
//! [`Undoable`] wraps a [`Reducer`](crate::mvi::Reducer) and folds every
//! action into a [`History`]:
//!
//! - excluded kinds ([`ExclusionFilter`]) update the present state only,
//! - kinds the [`ActionMerger`] accepts replace the present entry in place,
//! - everything else pushes the present entry onto the undo stack.
//!
//! Undo and redo are requested through actions implementing
//! [`HistoryAction`].

mod container;
mod exclusion;
mod merge;
mod reducer;

pub use container::{History, HistoryEntry};
pub use exclusion::ExclusionFilter;
pub use merge::{ActionMerger, MergeRules, NeverMerge};
pub use reducer::Undoable;

use crate::mvi::Action;

/// History navigation requested by an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryCommand {
    Undo,
    Redo,
}

/// Actions that can carry history navigation.
pub trait HistoryAction: Action {
    /// Returns the navigation this action requests, if any.
    fn history_command(&self) -> Option<HistoryCommand>;
}
