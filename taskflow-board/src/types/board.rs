//! Board-level types: Column, User

use super::ids::ColumnId;
use serde::{Deserialize, Serialize};

/// A column (list) groups tasks into a workflow stage
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    /// CSS color, e.g. `#3498db`
    pub color: String,
    /// Default columns exist for the lifetime of the board
    #[serde(default)]
    pub is_default: bool,
}

impl Column {
    /// Create a user-defined column with a fresh id
    pub fn custom(title: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: ColumnId::custom(),
            title: title.into(),
            color: color.into(),
            is_default: false,
        }
    }

    /// Create one of the permanent seed columns
    pub fn default_column(
        id: impl Into<ColumnId>,
        title: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            color: color.into(),
            is_default: true,
        }
    }

    /// Case-insensitive title comparison
    pub fn has_title(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
    }
}

/// A person who can view the board and be assigned tasks
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}
