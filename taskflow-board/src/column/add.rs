//! AddColumn command

use crate::context::BoardContext;
use crate::defaults::LIST_COLORS;
use crate::error::BoardError;
use crate::types::Column;
use serde::{Deserialize, Serialize};
use taskflow_operations::{async_trait, operation, Execute, ExecutionResult, LogEntry, Operation};
use tracing::debug;

/// Add a new list to the end of the board
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AddColumn {
    /// The list title; must be unique ignoring case
    pub title: String,
    /// Header color, first palette color when unset
    pub color: Option<String>,
}

operation!(
    AddColumn,
    verb = "add",
    noun = "column",
    description = "Add a new list to the board"
);

impl AddColumn {
    /// Create a new AddColumn command
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            color: None,
        }
    }

    /// Set the header color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for AddColumn {
    type Output = Column;

    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Column, BoardError> {
        let start = std::time::Instant::now();

        let title = self.title.trim();
        if title.is_empty() {
            return ExecutionResult::failed(BoardError::missing_field("list name"));
        }

        let mut state = ctx.write().await;

        // Check for duplicate title
        if state.store.find_column_by_title(title).is_some() {
            return ExecutionResult::failed(BoardError::DuplicateName {
                name: title.to_string(),
            });
        }

        let color = self
            .color
            .clone()
            .unwrap_or_else(|| LIST_COLORS[0].to_string());
        let column = Column::custom(title, color);

        debug!(id = %column.id, "Adding column");
        state.store.insert_column(column.clone());

        ExecutionResult::Logged {
            log_entry: LogEntry::new(
                self.op_string(),
                format!("Created new list \"{}\"", column.title),
                None,
                start.elapsed().as_millis() as u64,
            ),
            value: column,
        }
    }
}
