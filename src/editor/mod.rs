//! Editor content: diagrams, items and their domain handlers.
//!
//! Each domain module contributes its handlers to a shared
//! [`ReducerTable`] through `register`.

mod appearance;
mod diagrams;
mod items;
mod merge;
mod ordering;
mod selection;
mod state;

pub use merge::{editor_merge_rules, same_target};
pub use state::{Bounds, Diagram, DiagramId, EditorState, Item, ItemId};

use crate::action::{ActionKind, AppAction};
use crate::history::ExclusionFilter;
use crate::mvi::ReducerTable;

/// Domain reducer over [`EditorState`].
pub type EditorReducer = ReducerTable<EditorState, AppAction>;

/// Builds the editor's dispatch table from every domain module.
pub fn editor_reducer() -> EditorReducer {
    ReducerTable::build(|builder| {
        appearance::register(builder);
        diagrams::register(builder);
        items::register(builder);
        ordering::register(builder);
        selection::register(builder);
    })
}

/// Selection changes never become undo steps.
pub fn editor_exclusions() -> ExclusionFilter<ActionKind> {
    ExclusionFilter::new([ActionKind::SelectDiagram, ActionKind::SelectItems])
}
