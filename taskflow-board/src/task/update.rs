//! UpdateTask command

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::types::{Priority, Task, TaskId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use taskflow_operations::{async_trait, operation, Execute, ExecutionResult, LogEntry, Operation};

/// Update the editable fields of an existing task
///
/// The task's column is never changed here; use `MoveTask`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpdateTask {
    /// The task ID to update
    pub id: TaskId,
    /// New title
    pub title: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New priority
    pub priority: Option<Priority>,
    /// New due date (None = don't change, Some(None) = clear, Some(Some(x)) = set)
    pub due_date: Option<Option<NaiveDate>>,
    /// New assignee
    pub assignee: Option<String>,
}

operation!(
    UpdateTask,
    verb = "update",
    noun = "task",
    description = "Update task properties"
);

impl UpdateTask {
    /// Create a new UpdateTask command
    pub fn new(id: impl Into<TaskId>) -> Self {
        Self {
            id: id.into(),
            title: None,
            description: None,
            priority: None,
            due_date: None,
            assignee: None,
        }
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Set or clear the due date
    pub fn with_due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Set the assignee
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for UpdateTask {
    type Output = Task;

    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Task, BoardError> {
        let start = std::time::Instant::now();
        let mut state = ctx.write().await;

        let Some(task) = state.store.task_mut(&self.id) else {
            return ExecutionResult::failed(BoardError::TaskNotFound {
                id: self.id.to_string(),
            });
        };

        // Apply updates
        if let Some(title) = &self.title {
            task.title = title.clone();
        }
        if let Some(description) = &self.description {
            task.description = Some(description.clone());
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(due_date) = self.due_date {
            task.due_date = due_date;
        }
        if let Some(assignee) = &self.assignee {
            task.assignee = assignee.clone();
        }

        let task = task.clone();
        ExecutionResult::Logged {
            log_entry: LogEntry::new(
                self.op_string(),
                format!("Updated task \"{}\"", task.title),
                None,
                start.elapsed().as_millis() as u64,
            ),
            value: task,
        }
    }
}
