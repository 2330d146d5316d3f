//! ListTasks command

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::filter::{self, visible_tasks};
use crate::types::{ColumnId, FilterCriteria, Task};
use serde::{Deserialize, Serialize};
use taskflow_operations::{async_trait, operation, Execute, ExecutionResult};

/// List the visible tasks of one column
///
/// Uses the board's active filters unless explicit criteria are given.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListTasks {
    /// The column to list
    pub column: ColumnId,
    /// Criteria to apply instead of the active filters
    pub criteria: Option<FilterCriteria>,
}

operation!(
    ListTasks,
    verb = "list",
    noun = "tasks",
    description = "List the visible tasks in a column"
);

impl ListTasks {
    pub fn in_column(column: impl Into<ColumnId>) -> Self {
        Self {
            column: column.into(),
            criteria: None,
        }
    }

    /// Filter with these criteria instead of the active ones
    pub fn with_criteria(mut self, criteria: FilterCriteria) -> Self {
        self.criteria = Some(criteria);
        self
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for ListTasks {
    type Output = Vec<Task>;

    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Vec<Task>, BoardError> {
        let state = ctx.read().await;
        if !state.store.contains_column(&self.column) {
            return ExecutionResult::failed(BoardError::ColumnNotFound {
                id: self.column.to_string(),
            });
        }

        let criteria = self.criteria.as_ref().unwrap_or(&state.filters);
        let value = visible_tasks(state.store.tasks(), &self.column, criteria, filter::today());
        ExecutionResult::Unlogged { value }
    }
}
