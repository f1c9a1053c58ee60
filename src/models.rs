//! Frontend Models
//!
//! Data structures shared by the cart and todo stores.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A purchasable product (immutable after startup)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: u32,
    pub name: String,
    pub price: u32,
}

/// One catalog item's presence in the cart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Catalog item id
    pub id: u32,
    pub name: String,
    pub price: u32,
    /// Always >= 1
    pub quantity: u32,
}

impl CartLine {
    pub fn from_item(item: &CatalogItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            price: item.price,
            quantity: 1,
        }
    }

    /// price × quantity
    pub fn line_total(&self) -> u64 {
        u64::from(self.price) * u64::from(self.quantity)
    }

    /// Whether a decrement would change the quantity
    pub fn can_decrement(&self) -> bool {
        self.quantity > 1
    }
}

/// Stable task identifier, never reused within a todo list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskId(pub u32);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single todo entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    /// Text as typed (not trimmed)
    pub text: String,
    pub completed: bool,
}

/// Which task is mid-edit and its unsaved draft
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub target: TaskId,
    pub draft: String,
}

/// View-only predicate over the task list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Completed,
    Incomplete,
}

impl Filter {
    /// All filters in selector order
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Completed, Filter::Incomplete];

    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Completed => "completed",
            Filter::Incomplete => "incomplete",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Completed => "Completed",
            Filter::Incomplete => "Incomplete",
        }
    }

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Completed => task.completed,
            Filter::Incomplete => !task.completed,
        }
    }
}
