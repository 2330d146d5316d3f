//! ExportBoard command

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::types::BoardExport;
use serde::{Deserialize, Serialize};
use taskflow_operations::{async_trait, operation, Execute, ExecutionResult};
use tracing::debug;

/// Snapshot every task and the theme as an interchange document
///
/// Filters are ignored; the export always carries the whole task set.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct ExportBoard;

operation!(
    ExportBoard,
    verb = "export",
    noun = "board",
    description = "Export tasks and theme as JSON"
);

#[async_trait]
impl Execute<BoardContext, BoardError> for ExportBoard {
    type Output = BoardExport;

    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<BoardExport, BoardError> {
        let state = ctx.read().await;
        let tasks: Vec<_> = state.store.tasks().cloned().collect();
        debug!(tasks = tasks.len(), "Exporting board");
        ExecutionResult::Unlogged {
            value: BoardExport::new(tasks, state.theme.clone()),
        }
    }
}
