//! GetTask command

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::types::{Task, TaskId};
use serde::{Deserialize, Serialize};
use taskflow_operations::{async_trait, operation, Execute, ExecutionResult};

/// Get a task by ID
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GetTask {
    /// The task ID to retrieve
    pub id: TaskId,
}

operation!(
    GetTask,
    verb = "get",
    noun = "task",
    description = "Retrieve a task by ID"
);

impl GetTask {
    /// Create a new GetTask command
    pub fn new(id: impl Into<TaskId>) -> Self {
        Self { id: id.into() }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for GetTask {
    type Output = Task;

    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Task, BoardError> {
        let state = ctx.read().await;
        let result = state
            .store
            .task(&self.id)
            .cloned()
            .ok_or_else(|| BoardError::TaskNotFound {
                id: self.id.to_string(),
            });
        result.into()
    }
}
