use crate::action::{ActionKind, AppAction};
use crate::mvi::TableBuilder;

use super::state::EditorState;

pub(super) fn register(builder: &mut TableBuilder<EditorState, AppAction>) {
    builder.add_case(ActionKind::ChangeAppearance, change_appearance);
}

fn change_appearance(state: EditorState, action: &AppAction) -> EditorState {
    let AppAction::ChangeAppearance {
        diagram_id,
        item_ids,
        key,
        value,
    } = action
    else {
        return state;
    };
    state.update_diagram(diagram_id, |diagram| {
        for id in item_ids {
            if let Some(item) = diagram.items.get_mut(id) {
                item.appearance.insert(key.clone(), value.clone());
            }
        }
    })
}
