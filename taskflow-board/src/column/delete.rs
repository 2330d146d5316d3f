//! DeleteColumn command

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::types::{Column, ColumnId, Task};
use serde::{Deserialize, Serialize};
use taskflow_operations::{async_trait, operation, Execute, ExecutionResult, LogEntry, Operation};
use tracing::debug;

/// Delete a custom list and every task in it
///
/// Default lists are protected. The list and its tasks go in one step.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeleteColumn {
    /// The column ID to delete
    pub id: ColumnId,
}

operation!(
    DeleteColumn,
    verb = "delete",
    noun = "column",
    description = "Delete a list and all of its tasks"
);

impl DeleteColumn {
    pub fn new(id: impl Into<ColumnId>) -> Self {
        Self { id: id.into() }
    }
}

/// What a column deletion removed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnDeletion {
    pub column: Column,
    pub removed_tasks: Vec<Task>,
}

#[async_trait]
impl Execute<BoardContext, BoardError> for DeleteColumn {
    type Output = ColumnDeletion;

    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<ColumnDeletion, BoardError> {
        let start = std::time::Instant::now();
        let mut state = ctx.write().await;

        match state.store.column(&self.id) {
            None => {
                return ExecutionResult::failed(BoardError::ColumnNotFound {
                    id: self.id.to_string(),
                })
            }
            Some(column) if column.is_default => {
                return ExecutionResult::failed(BoardError::ProtectedColumn {
                    id: self.id.to_string(),
                })
            }
            Some(_) => {}
        }

        let Some((column, removed_tasks)) = state.store.remove_column_cascade(&self.id) else {
            return ExecutionResult::failed(BoardError::ColumnNotFound {
                id: self.id.to_string(),
            });
        };
        debug!(id = %self.id, removed = removed_tasks.len(), "Deleted column");

        ExecutionResult::Logged {
            log_entry: LogEntry::new(
                self.op_string(),
                format!(
                    "Deleted list \"{}\" with {} task(s)",
                    column.title,
                    removed_tasks.len()
                ),
                None,
                start.elapsed().as_millis() as u64,
            ),
            value: ColumnDeletion {
                column,
                removed_tasks,
            },
        }
    }
}
