//! DeleteTask command

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::types::{Task, TaskId};
use serde::{Deserialize, Serialize};
use taskflow_operations::{async_trait, operation, Execute, ExecutionResult, LogEntry, Operation};
use tracing::debug;

/// Delete a task
///
/// Deleting an id that is not on the board is a silent no-op.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeleteTask {
    /// The task ID to delete
    pub id: TaskId,
}

operation!(
    DeleteTask,
    verb = "delete",
    noun = "task",
    description = "Delete a task from the board"
);

impl DeleteTask {
    pub fn new(id: impl Into<TaskId>) -> Self {
        Self { id: id.into() }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for DeleteTask {
    /// The removed task, if there was one
    type Output = Option<Task>;

    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Option<Task>, BoardError> {
        let start = std::time::Instant::now();
        let mut state = ctx.write().await;

        match state.store.remove_task(&self.id) {
            Some(task) => ExecutionResult::Logged {
                log_entry: LogEntry::new(
                    self.op_string(),
                    format!("Deleted task \"{}\"", task.title),
                    None,
                    start.elapsed().as_millis() as u64,
                ),
                value: Some(task),
            },
            None => {
                debug!(id = %self.id, "Delete of unknown task ignored");
                ExecutionResult::Unlogged { value: None }
            }
        }
    }
}
