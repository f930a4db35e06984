use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::mvi::SliceState;

/// Identifier of a diagram inside a document.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiagramId(pub String);

/// Identifier of an item inside a diagram.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl ItemId {
    /// Fresh random identifier for a newly created item.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl From<&str> for DiagramId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for DiagramId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// A shape placed on a diagram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    /// Renderer key, e.g. "Button" or "Rectangle".
    pub shape: String,
    pub bounds: Bounds,
    #[serde(default)]
    pub appearance: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagram {
    pub id: DiagramId,
    #[serde(default)]
    pub items: BTreeMap<ItemId, Item>,
    /// Paint order, back to front.
    #[serde(default)]
    pub order: Vec<ItemId>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub selected: BTreeSet<ItemId>,
}

impl Diagram {
    pub fn new(id: DiagramId) -> Self {
        Self {
            id,
            items: BTreeMap::new(),
            order: Vec::new(),
            selected: BTreeSet::new(),
        }
    }

    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.items.get(id)
    }
}

/// Editor content: every diagram of the open document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EditorState {
    #[serde(default)]
    pub diagrams: BTreeMap<DiagramId, Diagram>,
    /// Ordered list of diagram ids as shown in the page list.
    #[serde(default)]
    pub diagram_order: Vec<DiagramId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_diagram: Option<DiagramId>,
}

impl SliceState for EditorState {}

impl EditorState {
    pub fn diagram(&self, id: &DiagramId) -> Option<&Diagram> {
        self.diagrams.get(id)
    }

    pub fn item(&self, diagram_id: &DiagramId, item_id: &ItemId) -> Option<&Item> {
        self.diagram(diagram_id).and_then(|diagram| diagram.item(item_id))
    }

    pub fn item_count(&self) -> usize {
        self.diagrams.values().map(|diagram| diagram.items.len()).sum()
    }

    /// Applies `update` to the diagram if it exists; unknown ids are ignored.
    pub(crate) fn update_diagram(
        mut self,
        id: &DiagramId,
        update: impl FnOnce(&mut Diagram),
    ) -> Self {
        if let Some(diagram) = self.diagrams.get_mut(id) {
            update(diagram);
        }
        self
    }
}
