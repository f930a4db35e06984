use crate::mvi::SliceState;

pub const DEFAULT_TAB: &str = "shapes";

#[derive(Debug, Clone, PartialEq)]
pub struct AssetsState {
    /// Case-insensitive filter applied to the catalogue.
    pub filter: String,
    pub active_tab: String,
}

impl Default for AssetsState {
    fn default() -> Self {
        Self {
            filter: String::new(),
            active_tab: DEFAULT_TAB.to_string(),
        }
    }
}

impl SliceState for AssetsState {}

impl AssetsState {
    pub fn matches(&self, name: &str) -> bool {
        name.to_lowercase().contains(&self.filter.to_lowercase())
    }
}
