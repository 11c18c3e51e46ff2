use serde::{Deserialize, Serialize};

/// A task/shift category that can be placed in a cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkItem {
    pub id: String,
    pub label: String,
    /// Named color token ("emerald", "orange", ...) or a `#RRGGBB` hex value
    #[serde(rename = "color", default)]
    pub color_token: String,
}

impl WorkItem {
    pub fn new(id: &str, label: &str, color_token: &str) -> Self {
        WorkItem {
            id: id.to_string(),
            label: label.to_string(),
            color_token: color_token.to_string(),
        }
    }
}

/// The static list of selectable work items, in display order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkCatalog {
    items: Vec<WorkItem>,
}

impl WorkCatalog {
    pub fn new(items: Vec<WorkItem>) -> Self {
        WorkCatalog { items }
    }

    pub fn items(&self) -> &[WorkItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&WorkItem> {
        self.items.iter().find(|w| w.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Item at a display position (used for the 1-9 shortcuts)
    pub fn nth(&self, index: usize) -> Option<&WorkItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
