use crate::action::{ActionKind, AppAction};
use crate::mvi::TableBuilder;

use super::state::{Diagram, EditorState};

pub(super) fn register(builder: &mut TableBuilder<EditorState, AppAction>) {
    builder
        .add_case(ActionKind::AddDiagram, add_diagram)
        .add_case(ActionKind::RemoveDiagram, remove_diagram);
}

fn add_diagram(mut state: EditorState, action: &AppAction) -> EditorState {
    let AppAction::AddDiagram { diagram_id } = action else {
        return state;
    };
    if state.diagrams.contains_key(diagram_id) {
        return state;
    }
    state
        .diagrams
        .insert(diagram_id.clone(), Diagram::new(diagram_id.clone()));
    state.diagram_order.push(diagram_id.clone());
    if state.selected_diagram.is_none() {
        state.selected_diagram = Some(diagram_id.clone());
    }
    state
}

fn remove_diagram(mut state: EditorState, action: &AppAction) -> EditorState {
    let AppAction::RemoveDiagram { diagram_id } = action else {
        return state;
    };
    if state.diagrams.remove(diagram_id).is_none() {
        return state;
    }
    state.diagram_order.retain(|id| id != diagram_id);
    if state.selected_diagram.as_ref() == Some(diagram_id) {
        state.selected_diagram = state.diagram_order.first().cloned();
    }
    state
}
