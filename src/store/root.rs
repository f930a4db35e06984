use crate::action::AppAction;
use crate::assets::{AssetsReducer, AssetsState};
use crate::editor::{editor_exclusions, editor_merge_rules, editor_reducer, EditorReducer, EditorState};
use crate::history::{History, MergeRules, Undoable};
use crate::loading::{LoadingReducer, LoadingReset, LoadingState};
use crate::mvi::{Action, Reducer, SliceState};
use crate::ui::{UiReducer, UiState};

/// Editor slice: content history behind the loading gate.
pub type EditorHistory = History<EditorState, AppAction>;

/// Aggregate of every slice. Each field is owned by exactly one reducer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RootState {
    pub assets: AssetsState,
    pub editor: EditorHistory,
    pub loading: LoadingState,
    pub ui: UiState,
}

impl SliceState for RootState {}

impl RootState {
    /// Editor content currently shown.
    pub fn content(&self) -> &EditorState {
        self.editor.present()
    }
}

/// Editor reducer stack: loading gate, history, domain table.
pub type EditorSliceReducer = LoadingReset<Undoable<EditorReducer, MergeRules<AppAction>>>;

/// Routes each action to the slices that own its scope.
pub struct RootReducer {
    editor: EditorSliceReducer,
    loading: LoadingReducer,
    ui: UiReducer,
    assets: AssetsReducer,
}

impl RootReducer {
    pub fn new(editor: EditorSliceReducer) -> Self {
        Self {
            editor,
            loading: LoadingReducer,
            ui: UiReducer,
            assets: AssetsReducer,
        }
    }

    /// Editor stack with the editor's default merge and exclusion rules.
    pub fn editor_stack(merge: MergeRules<AppAction>, max_depth: Option<usize>) -> EditorSliceReducer {
        LoadingReset::new(
            Undoable::new(editor_reducer(), merge, editor_exclusions()).with_max_depth(max_depth),
        )
    }
}

impl Default for RootReducer {
    fn default() -> Self {
        Self::new(Self::editor_stack(editor_merge_rules(), None))
    }
}

impl Reducer for RootReducer {
    type State = RootState;
    type Action = AppAction;

    fn reduce(&self, state: Self::State, action: &Self::Action) -> Self::State {
        let RootState {
            assets,
            editor,
            loading,
            ui,
        } = state;

        let editor = if action.kind().reaches_editor() {
            self.editor.reduce(editor, action)
        } else {
            editor
        };

        RootState {
            assets: self.assets.reduce(assets, action),
            editor,
            loading: self.loading.reduce(loading, action),
            ui: self.ui.reduce(ui, action),
        }
    }
}
