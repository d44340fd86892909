//! Board Models
//!
//! Columns and the items they hold.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type ColumnId = String;
pub type ItemId = String;

/// Fresh collision-resistant identifier
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// A single card on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub content: String,
}

impl Item {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            content: content.into(),
        }
    }
}

/// A named, ordered bucket of items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    /// Display order
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Column {
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_id(new_id(), title)
    }

    pub fn with_id(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            items: Vec::new(),
        }
    }

    pub fn contains(&self, item_id: &str) -> bool {
        self.items.iter().any(|item| item.id == item_id)
    }

    pub fn position_of(&self, item_id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == item_id)
    }
}
