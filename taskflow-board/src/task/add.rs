//! AddTask command

use crate::context::BoardContext;
use crate::defaults::TODO_COLUMN;
use crate::error::BoardError;
use crate::types::{ColumnId, Priority, Task};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use taskflow_operations::{async_trait, operation, Execute, ExecutionResult, LogEntry, Operation};
use tracing::debug;

/// Add a new task to a column
///
/// The title is taken as given; presence checks belong to the caller.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AddTask {
    /// The task title
    pub title: String,
    /// Detailed task description
    pub description: Option<String>,
    /// Priority, `Medium` when unset
    pub priority: Option<Priority>,
    /// Due date (date only)
    pub due_date: Option<NaiveDate>,
    /// Assignee name, the current user when unset
    pub assignee: Option<String>,
    /// Target column, `todo` when unset
    pub column: Option<ColumnId>,
}

operation!(
    AddTask,
    verb = "add",
    noun = "task",
    description = "Create a new task on the board"
);

impl AddTask {
    /// Create a new AddTask command with just a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            priority: None,
            due_date: None,
            assignee: None,
            column: None,
        }
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

    /// Set the due date
    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Set the assignee
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    /// Place the task in a specific column
    pub fn in_column(mut self, column: impl Into<ColumnId>) -> Self {
        self.column = Some(column.into());
        self
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for AddTask {
    type Output = Task;

    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Task, BoardError> {
        let start = std::time::Instant::now();
        let mut state = ctx.write().await;

        let column = self
            .column
            .clone()
            .unwrap_or_else(|| ColumnId::from_string(TODO_COLUMN));
        if !state.store.contains_column(&column) {
            return ExecutionResult::failed(BoardError::ColumnNotFound {
                id: column.to_string(),
            });
        }

        let assignee = self
            .assignee
            .clone()
            .unwrap_or_else(|| state.session.current().name.clone());

        let task = Task {
            description: self.description.clone(),
            priority: self.priority.unwrap_or_default(),
            due_date: self.due_date,
            assignee,
            ..Task::new(self.title.clone(), column)
        };

        debug!(id = %task.id, column = %task.status, "Adding task");
        state.store.insert_task(task.clone());

        ExecutionResult::Logged {
            log_entry: LogEntry::new(
                self.op_string(),
                format!("Created task \"{}\"", task.title),
                None,
                start.elapsed().as_millis() as u64,
            ),
            value: task,
        }
    }
}
