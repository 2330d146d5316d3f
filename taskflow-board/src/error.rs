//! Error types for the board engine

use thiserror::Error;

/// Result type for board operations
pub type Result<T> = std::result::Result<T, BoardError>;

/// Errors that can occur in board operations
#[derive(Debug, Error)]
pub enum BoardError {
    /// Task not found
    #[error("task not found: {id}")]
    TaskNotFound { id: String },

    /// Column not found
    #[error("column not found: {id}")]
    ColumnNotFound { id: String },

    /// User not found in the roster
    #[error("user not found: {name}")]
    UserNotFound { name: String },

    /// A column with this title already exists (case-insensitive)
    #[error("a column named '{name}' already exists")]
    DuplicateName { name: String },

    /// Default columns cannot be deleted
    #[error("column '{id}' is a default column and cannot be deleted")]
    ProtectedColumn { id: String },

    /// Missing required field
    #[error("missing required field: {field}")]
    MissingField { field: String },

    /// Import payload failed shape validation
    #[error("malformed import: {message}")]
    MalformedImport { message: String },

    /// Configuration could not be loaded or is invalid
    #[error("configuration error: {message}")]
    Config { message: String },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BoardError {
    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create a malformed import error
    pub fn malformed_import(message: impl Into<String>) -> Self {
        Self::MalformedImport {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check if this error refers to an id or name absent from the board
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::TaskNotFound { .. } | Self::ColumnNotFound { .. } | Self::UserNotFound { .. }
        )
    }

    /// Short notification text suitable for showing to the user
    pub fn user_message(&self) -> String {
        match self {
            Self::TaskNotFound { .. } => "Task not found".into(),
            Self::ColumnNotFound { .. } => "List not found".into(),
            Self::UserNotFound { name } => format!("Unknown user {name}"),
            Self::DuplicateName { .. } => "A list with this name already exists".into(),
            Self::ProtectedColumn { .. } => "Cannot delete default lists".into(),
            Self::MissingField { field } => format!("Please enter a {field}"),
            Self::MalformedImport { .. } => "Invalid board file format".into(),
            Self::Json(_) => "Error reading board file".into(),
            Self::Config { message } => message.clone(),
        }
    }
}
