use crate::action::{ActionKind, AppAction};
use crate::mvi::TableBuilder;

use super::state::EditorState;

pub(super) fn register(builder: &mut TableBuilder<EditorState, AppAction>) {
    builder
        .add_case(ActionKind::SelectDiagram, select_diagram)
        .add_case(ActionKind::SelectItems, select_items);
}

fn select_diagram(mut state: EditorState, action: &AppAction) -> EditorState {
    let AppAction::SelectDiagram { diagram_id } = action else {
        return state;
    };
    match diagram_id {
        Some(id) if !state.diagrams.contains_key(id) => state,
        _ => {
            state.selected_diagram = diagram_id.clone();
            state
        }
    }
}

fn select_items(state: EditorState, action: &AppAction) -> EditorState {
    let AppAction::SelectItems {
        diagram_id,
        item_ids,
    } = action
    else {
        return state;
    };
    state.update_diagram(diagram_id, |diagram| {
        diagram.selected = item_ids
            .iter()
            .filter(|id| diagram.items.contains_key(*id))
            .cloned()
            .collect();
    })
}
