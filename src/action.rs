//! Every action the editor store understands.

use serde::{Deserialize, Serialize};

use crate::editor::{Bounds, DiagramId, EditorState, ItemId};
use crate::history::{HistoryAction, HistoryCommand};
use crate::loading::{ContentAction, ContentSignal};
use crate::mvi::Action;

/// Root action dispatched through the store.
///
/// Deserializes from `{ kind = "move_items", ... }` tables, which is how
/// replay scripts spell them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AppAction {
    // Diagrams
    AddDiagram {
        diagram_id: DiagramId,
    },
    RemoveDiagram {
        diagram_id: DiagramId,
    },
    SelectDiagram {
        diagram_id: Option<DiagramId>,
    },

    // Items
    SelectItems {
        diagram_id: DiagramId,
        item_ids: Vec<ItemId>,
    },
    AddItem {
        diagram_id: DiagramId,
        item_id: ItemId,
        shape: String,
        bounds: Bounds,
    },
    RemoveItems {
        diagram_id: DiagramId,
        item_ids: Vec<ItemId>,
    },
    MoveItems {
        diagram_id: DiagramId,
        item_ids: Vec<ItemId>,
        dx: f64,
        dy: f64,
    },
    ResizeItems {
        diagram_id: DiagramId,
        item_ids: Vec<ItemId>,
        width: f64,
        height: f64,
    },
    ChangeAppearance {
        diagram_id: DiagramId,
        item_ids: Vec<ItemId>,
        key: String,
        value: String,
    },
    BringToFront {
        diagram_id: DiagramId,
        item_ids: Vec<ItemId>,
    },
    SendToBack {
        diagram_id: DiagramId,
        item_ids: Vec<ItemId>,
    },

    // History
    Undo,
    Redo,

    // Content lifecycle
    LoadStarted {
        read_token: String,
    },
    LoadSucceeded {
        state: EditorState,
        read_token: String,
        #[serde(default)]
        write_token: Option<String>,
        #[serde(default)]
        navigate: bool,
    },
    LoadFailed {
        error: String,
    },
    NewDiagram {
        #[serde(default)]
        navigate: bool,
    },
    SaveSucceeded {
        read_token: String,
        write_token: String,
        #[serde(default)]
        navigate: bool,
    },
    SaveFailed {
        error: String,
    },

    // UI
    SetZoom {
        zoom: f64,
    },
    ToggleSidebar,

    // Assets
    FilterAssets {
        filter: String,
    },
    SelectAssetTab {
        tab: String,
    },
}

/// Payload-free discriminant of [`AppAction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ActionKind {
    AddDiagram,
    RemoveDiagram,
    SelectDiagram,
    SelectItems,
    AddItem,
    RemoveItems,
    MoveItems,
    ResizeItems,
    ChangeAppearance,
    BringToFront,
    SendToBack,
    Undo,
    Redo,
    LoadStarted,
    LoadSucceeded,
    LoadFailed,
    NewDiagram,
    SaveSucceeded,
    SaveFailed,
    SetZoom,
    ToggleSidebar,
    FilterAssets,
    SelectAssetTab,
}

/// Which slices of the root state an action kind concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Editor content; recorded by history.
    Editor,
    /// Undo/redo navigation.
    History,
    /// Document lifecycle; seen by both the editor and the loading slice.
    Content,
    Ui,
    Assets,
}

impl ActionKind {
    pub fn scope(self) -> Scope {
        match self {
            ActionKind::AddDiagram
            | ActionKind::RemoveDiagram
            | ActionKind::SelectDiagram
            | ActionKind::SelectItems
            | ActionKind::AddItem
            | ActionKind::RemoveItems
            | ActionKind::MoveItems
            | ActionKind::ResizeItems
            | ActionKind::ChangeAppearance
            | ActionKind::BringToFront
            | ActionKind::SendToBack => Scope::Editor,
            ActionKind::Undo | ActionKind::Redo => Scope::History,
            ActionKind::LoadStarted
            | ActionKind::LoadSucceeded
            | ActionKind::LoadFailed
            | ActionKind::NewDiagram
            | ActionKind::SaveSucceeded
            | ActionKind::SaveFailed => Scope::Content,
            ActionKind::SetZoom | ActionKind::ToggleSidebar => Scope::Ui,
            ActionKind::FilterAssets | ActionKind::SelectAssetTab => Scope::Assets,
        }
    }

    /// True for kinds the editor slice (history + content) must see.
    ///
    /// Of the content kinds only those that replace or reject content pass;
    /// load progress and saves leave history alone.
    pub fn reaches_editor(self) -> bool {
        match self.scope() {
            Scope::Editor | Scope::History => true,
            Scope::Content => matches!(
                self,
                ActionKind::LoadSucceeded | ActionKind::LoadFailed | ActionKind::NewDiagram
            ),
            Scope::Ui | Scope::Assets => false,
        }
    }
}

impl AppAction {
    /// Adds a new item with a generated id.
    pub fn add_item(diagram_id: DiagramId, shape: impl Into<String>, bounds: Bounds) -> Self {
        AppAction::AddItem {
            diagram_id,
            item_id: ItemId::generate(),
            shape: shape.into(),
            bounds,
        }
    }

    /// Diagram and item ids targeted by item-level actions.
    pub fn item_target(&self) -> Option<(&DiagramId, &[ItemId])> {
        match self {
            AppAction::SelectItems {
                diagram_id,
                item_ids,
            }
            | AppAction::RemoveItems {
                diagram_id,
                item_ids,
            }
            | AppAction::MoveItems {
                diagram_id,
                item_ids,
                ..
            }
            | AppAction::ResizeItems {
                diagram_id,
                item_ids,
                ..
            }
            | AppAction::ChangeAppearance {
                diagram_id,
                item_ids,
                ..
            }
            | AppAction::BringToFront {
                diagram_id,
                item_ids,
            }
            | AppAction::SendToBack {
                diagram_id,
                item_ids,
            } => Some((diagram_id, item_ids.as_slice())),
            _ => None,
        }
    }
}

impl Action for AppAction {
    type Kind = ActionKind;

    fn kind(&self) -> ActionKind {
        match self {
            AppAction::AddDiagram { .. } => ActionKind::AddDiagram,
            AppAction::RemoveDiagram { .. } => ActionKind::RemoveDiagram,
            AppAction::SelectDiagram { .. } => ActionKind::SelectDiagram,
            AppAction::SelectItems { .. } => ActionKind::SelectItems,
            AppAction::AddItem { .. } => ActionKind::AddItem,
            AppAction::RemoveItems { .. } => ActionKind::RemoveItems,
            AppAction::MoveItems { .. } => ActionKind::MoveItems,
            AppAction::ResizeItems { .. } => ActionKind::ResizeItems,
            AppAction::ChangeAppearance { .. } => ActionKind::ChangeAppearance,
            AppAction::BringToFront { .. } => ActionKind::BringToFront,
            AppAction::SendToBack { .. } => ActionKind::SendToBack,
            AppAction::Undo => ActionKind::Undo,
            AppAction::Redo => ActionKind::Redo,
            AppAction::LoadStarted { .. } => ActionKind::LoadStarted,
            AppAction::LoadSucceeded { .. } => ActionKind::LoadSucceeded,
            AppAction::LoadFailed { .. } => ActionKind::LoadFailed,
            AppAction::NewDiagram { .. } => ActionKind::NewDiagram,
            AppAction::SaveSucceeded { .. } => ActionKind::SaveSucceeded,
            AppAction::SaveFailed { .. } => ActionKind::SaveFailed,
            AppAction::SetZoom { .. } => ActionKind::SetZoom,
            AppAction::ToggleSidebar => ActionKind::ToggleSidebar,
            AppAction::FilterAssets { .. } => ActionKind::FilterAssets,
            AppAction::SelectAssetTab { .. } => ActionKind::SelectAssetTab,
        }
    }
}

impl HistoryAction for AppAction {
    fn history_command(&self) -> Option<HistoryCommand> {
        match self {
            AppAction::Undo => Some(HistoryCommand::Undo),
            AppAction::Redo => Some(HistoryCommand::Redo),
            _ => None,
        }
    }
}

impl ContentAction<EditorState> for AppAction {
    fn content_signal(&self) -> Option<ContentSignal<EditorState>> {
        match self {
            AppAction::LoadSucceeded { state, .. } => Some(ContentSignal::Loaded(state.clone())),
            AppAction::NewDiagram { .. } => Some(ContentSignal::Loaded(EditorState::default())),
            AppAction::LoadFailed { .. } => Some(ContentSignal::Failed),
            _ => None,
        }
    }
}
