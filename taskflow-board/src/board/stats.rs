//! GetStats command

use crate::context::BoardContext;
use crate::defaults::{DONE_COLUMN, IN_PROGRESS_COLUMN, TODO_COLUMN};
use crate::error::BoardError;
use crate::filter;
use crate::store::EntityStore;
use crate::types::ColumnId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use taskflow_operations::{async_trait, operation, Execute, ExecutionResult};

/// Task count for one column
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnCount {
    pub id: ColumnId,
    pub title: String,
    pub count: usize,
}

/// Board-wide counts; filters are ignored
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardStats {
    pub total: usize,
    pub todo: usize,
    pub in_progress: usize,
    pub done: usize,
    /// Past due and not in the done column
    pub overdue: usize,
    /// Rounded share of tasks in the done column, 0 for an empty board
    pub completion_percent: u8,
    pub per_column: Vec<ColumnCount>,
}

impl BoardStats {
    /// Compute statistics as of `today`
    pub fn compute(store: &EntityStore, today: NaiveDate) -> Self {
        let count = |id: &str| store.tasks().filter(|t| t.status == id).count();

        let total = store.task_count();
        let done = count(DONE_COLUMN);
        let overdue = store
            .tasks()
            .filter(|t| t.status != DONE_COLUMN)
            .filter(|t| t.due_date.is_some_and(|due| due < today))
            .count();
        let completion_percent = if total == 0 {
            0
        } else {
            ((done as f64 / total as f64) * 100.0).round() as u8
        };

        let per_column = store
            .columns()
            .map(|c| ColumnCount {
                id: c.id.clone(),
                title: c.title.clone(),
                count: store.tasks_in(&c.id).count(),
            })
            .collect();

        Self {
            total,
            todo: count(TODO_COLUMN),
            in_progress: count(IN_PROGRESS_COLUMN),
            done,
            overdue,
            completion_percent,
            per_column,
        }
    }
}

/// Compute board statistics
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct GetStats;

operation!(
    GetStats,
    verb = "get",
    noun = "stats",
    description = "Get board statistics"
);

#[async_trait]
impl Execute<BoardContext, BoardError> for GetStats {
    type Output = BoardStats;

    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<BoardStats, BoardError> {
        let state = ctx.read().await;
        ExecutionResult::Unlogged {
            value: BoardStats::compute(&state.store, filter::today()),
        }
    }
}
