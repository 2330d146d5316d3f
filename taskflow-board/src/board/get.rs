//! GetBoard command

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::filter::{self, visible_tasks};
use crate::types::{Column, FilterCriteria, Task};
use serde::Serialize;
use taskflow_operations::{async_trait, operation, Execute, ExecutionResult};

/// One column as shown under the active filters
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnView {
    pub column: Column,
    pub tasks: Vec<Task>,
    pub visible_count: usize,
}

/// The whole board derived for display
#[derive(Debug, Clone, Serialize)]
pub struct BoardView {
    pub columns: Vec<ColumnView>,
    pub filters: FilterCriteria,
    pub theme: String,
}

impl BoardView {
    /// Look up a column's view by id
    pub fn column(&self, id: &str) -> Option<&ColumnView> {
        self.columns.iter().find(|c| c.column.id == id)
    }
}

/// Derive every column's visible tasks, recomputed from scratch
#[derive(Debug, Default, Clone, serde::Deserialize, Serialize)]
pub struct GetBoard;

operation!(
    GetBoard,
    verb = "get",
    noun = "board",
    description = "Get the filtered board view"
);

#[async_trait]
impl Execute<BoardContext, BoardError> for GetBoard {
    type Output = BoardView;

    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<BoardView, BoardError> {
        let state = ctx.read().await;
        let today = filter::today();

        let columns = state
            .store
            .columns()
            .map(|column| {
                let tasks = visible_tasks(state.store.tasks(), &column.id, &state.filters, today);
                ColumnView {
                    column: column.clone(),
                    visible_count: tasks.len(),
                    tasks,
                }
            })
            .collect();

        ExecutionResult::Unlogged {
            value: BoardView {
                columns,
                filters: state.filters.clone(),
                theme: state.theme.clone(),
            },
        }
    }
}
