//! MoveTask command

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::types::{ColumnId, Task, TaskId};
use serde::{Deserialize, Serialize};
use taskflow_operations::{async_trait, operation, Execute, ExecutionResult, LogEntry, Operation};
use tracing::debug;

/// Move a task from one column to another (drag and drop)
///
/// A move onto the same column, or of a task that is not on the board, does
/// nothing and records nothing.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MoveTask {
    /// The task ID to move
    pub id: TaskId,
    /// Column the task was dragged from
    pub source: ColumnId,
    /// Column the task was dropped on
    pub target: ColumnId,
}

operation!(
    MoveTask,
    verb = "move",
    noun = "task",
    description = "Move a task to a different column"
);

impl MoveTask {
    pub fn new(
        id: impl Into<TaskId>,
        source: impl Into<ColumnId>,
        target: impl Into<ColumnId>,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
        }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for MoveTask {
    /// The moved task; `None` when the move was a no-op
    type Output = Option<Task>;

    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Option<Task>, BoardError> {
        let start = std::time::Instant::now();

        if self.source == self.target {
            return ExecutionResult::Unlogged { value: None };
        }

        let mut state = ctx.write().await;

        let Some(previous) = state.store.task(&self.id).map(|t| t.status.clone()) else {
            debug!(id = %self.id, "Move of unknown task ignored");
            return ExecutionResult::Unlogged { value: None };
        };

        if !state.store.contains_column(&self.target) {
            return ExecutionResult::failed(BoardError::ColumnNotFound {
                id: self.target.to_string(),
            });
        }
        if previous == self.target {
            return ExecutionResult::Unlogged { value: None };
        }

        let from = state.store.column_title(&previous);
        let to = state.store.column_title(&self.target);

        let Some(task) = state.store.task_mut(&self.id) else {
            return ExecutionResult::Unlogged { value: None };
        };
        task.status = self.target.clone();
        let task = task.clone();

        ExecutionResult::Logged {
            log_entry: LogEntry::new(
                self.op_string(),
                format!("Moved \"{}\" from {} to {}", task.title, from, to),
                None,
                start.elapsed().as_millis() as u64,
            ),
            value: Some(task),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::AddTask;

    fn setup() -> BoardContext {
        BoardContext::with_defaults().unwrap()
    }

    #[tokio::test]
    async fn test_move_task_to_column() {
        let ctx = setup();
        let task = AddTask::new("Task").execute(&ctx).await.into_result().unwrap();

        let (result, log_entry) = MoveTask::new(&task.id, "todo", "inProgress")
            .execute(&ctx)
            .await
            .split();

        assert_eq!(result.unwrap().unwrap().status, "inProgress");
        assert_eq!(
            log_entry.unwrap().message,
            "Moved \"Task\" from To Do to In Progress"
        );
    }

    #[tokio::test]
    async fn test_move_to_same_column_is_noop() {
        let ctx = setup();
        let task = AddTask::new("Task").execute(&ctx).await.into_result().unwrap();

        let result = MoveTask::new(&task.id, "todo", "todo").execute(&ctx).await;
        assert!(!result.should_log());
        assert_eq!(result.into_result().unwrap(), None);
    }

    #[tokio::test]
    async fn test_move_missing_task_is_noop() {
        let ctx = setup();
        let result = MoveTask::new("ghost", "todo", "done").execute(&ctx).await;
        assert!(!result.should_log());
        assert_eq!(result.into_result().unwrap(), None);
    }

    #[tokio::test]
    async fn test_move_task_invalid_column() {
        let ctx = setup();
        let task = AddTask::new("Task").execute(&ctx).await.into_result().unwrap();

        let result = MoveTask::new(&task.id, "todo", "nonexistent")
            .execute(&ctx)
            .await
            .into_result();

        assert!(matches!(result, Err(BoardError::ColumnNotFound { .. })));
        assert_eq!(
            ctx.read().await.store.task(&task.id).unwrap().status,
            "todo"
        );
    }

    #[tokio::test]
    async fn test_move_missing_task_to_unknown_column_is_noop() {
        let ctx = setup();
        let result = MoveTask::new("ghost", "todo", "custom-gone").execute(&ctx).await;
        assert!(!result.should_log());
        assert_eq!(result.into_result().unwrap(), None);
    }
}
