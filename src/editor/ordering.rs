use crate::action::{ActionKind, AppAction};
use crate::mvi::TableBuilder;

use super::state::{EditorState, ItemId};

pub(super) fn register(builder: &mut TableBuilder<EditorState, AppAction>) {
    builder
        .add_case(ActionKind::BringToFront, bring_to_front)
        .add_case(ActionKind::SendToBack, send_to_back);
}

/// Splits `order` into (untouched, moved), keeping relative order in both.
fn partition(order: &[ItemId], targets: &[ItemId]) -> (Vec<ItemId>, Vec<ItemId>) {
    order.iter().cloned().partition(|id| !targets.contains(id))
}

fn bring_to_front(state: EditorState, action: &AppAction) -> EditorState {
    let AppAction::BringToFront {
        diagram_id,
        item_ids,
    } = action
    else {
        return state;
    };
    state.update_diagram(diagram_id, |diagram| {
        let (mut rest, moved) = partition(&diagram.order, item_ids);
        rest.extend(moved);
        diagram.order = rest;
    })
}

fn send_to_back(state: EditorState, action: &AppAction) -> EditorState {
    let AppAction::SendToBack {
        diagram_id,
        item_ids,
    } = action
    else {
        return state;
    };
    state.update_diagram(diagram_id, |diagram| {
        let (rest, mut moved) = partition(&diagram.order, item_ids);
        moved.extend(rest);
        diagram.order = moved;
    })
}
