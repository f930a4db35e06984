use std::collections::BTreeMap;

use crate::action::{ActionKind, AppAction};
use crate::mvi::TableBuilder;

use super::state::{EditorState, Item};

/// Items never shrink below this edge length.
const MIN_SIZE: f64 = 1.0;

pub(super) fn register(builder: &mut TableBuilder<EditorState, AppAction>) {
    builder
        .add_case(ActionKind::AddItem, add_item)
        .add_case(ActionKind::RemoveItems, remove_items)
        .add_case(ActionKind::MoveItems, move_items)
        .add_case(ActionKind::ResizeItems, resize_items);
}

fn add_item(state: EditorState, action: &AppAction) -> EditorState {
    let AppAction::AddItem {
        diagram_id,
        item_id,
        shape,
        bounds,
    } = action
    else {
        return state;
    };
    state.update_diagram(diagram_id, |diagram| {
        if diagram.items.contains_key(item_id) {
            return;
        }
        diagram.items.insert(
            item_id.clone(),
            Item {
                id: item_id.clone(),
                shape: shape.clone(),
                bounds: *bounds,
                appearance: BTreeMap::new(),
            },
        );
        diagram.order.push(item_id.clone());
    })
}

fn remove_items(state: EditorState, action: &AppAction) -> EditorState {
    let AppAction::RemoveItems {
        diagram_id,
        item_ids,
    } = action
    else {
        return state;
    };
    state.update_diagram(diagram_id, |diagram| {
        for id in item_ids {
            diagram.items.remove(id);
            diagram.selected.remove(id);
        }
        diagram.order.retain(|id| !item_ids.contains(id));
    })
}

fn move_items(state: EditorState, action: &AppAction) -> EditorState {
    let AppAction::MoveItems {
        diagram_id,
        item_ids,
        dx,
        dy,
    } = action
    else {
        return state;
    };
    state.update_diagram(diagram_id, |diagram| {
        for id in item_ids {
            if let Some(item) = diagram.items.get_mut(id) {
                item.bounds.x += *dx;
                item.bounds.y += *dy;
            }
        }
    })
}

fn resize_items(state: EditorState, action: &AppAction) -> EditorState {
    let AppAction::ResizeItems {
        diagram_id,
        item_ids,
        width,
        height,
    } = action
    else {
        return state;
    };
    state.update_diagram(diagram_id, |diagram| {
        for id in item_ids {
            if let Some(item) = diagram.items.get_mut(id) {
                item.bounds.width = (*width).max(MIN_SIZE);
                item.bounds.height = (*height).max(MIN_SIZE);
            }
        }
    })
}
