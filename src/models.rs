//! Frontend Models
//!
//! Plain data shared by the store, the session and the components.

use serde::Deserialize;

/// A single to-do entry. Identity is its position in the list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Todo {
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl Todo {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            completed: false,
        }
    }

    /// Copy of this item with `completed` flipped
    pub fn toggled(&self) -> Self {
        Self {
            text: self.text.clone(),
            completed: !self.completed,
        }
    }

    /// Copy of this item with the text replaced verbatim
    pub fn with_text(&self, text: &str) -> Self {
        Self {
            text: text.to_string(),
            completed: self.completed,
        }
    }
}

/// Which items the list view shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// Filter buttons in display order
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !todo.completed,
            Filter::Completed => todo.completed,
        }
    }
}
