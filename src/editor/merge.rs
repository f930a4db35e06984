use crate::action::{ActionKind, AppAction};
use crate::history::MergeRules;

/// Merge rules for continuous editing gestures.
///
/// Dragging, resizing and tweaking one appearance property produce a stream
/// of actions; each stream collapses into a single undo step as long as it
/// keeps targeting the same items.
pub fn editor_merge_rules() -> MergeRules<AppAction> {
    MergeRules::new([
        ActionKind::MoveItems,
        ActionKind::ResizeItems,
        ActionKind::ChangeAppearance,
    ])
    .with_predicate(same_target)
}

/// True when both actions address the same diagram and item ids, and for
/// appearance changes the same property key.
pub fn same_target(previous: &AppAction, incoming: &AppAction) -> bool {
    if previous.item_target() != incoming.item_target() {
        return false;
    }
    match (previous, incoming) {
        (
            AppAction::ChangeAppearance { key: previous, .. },
            AppAction::ChangeAppearance { key: incoming, .. },
        ) => previous == incoming,
        _ => true,
    }
}
