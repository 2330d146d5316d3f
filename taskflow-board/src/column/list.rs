//! ListColumns command

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::types::Column;
use serde::{Deserialize, Serialize};
use taskflow_operations::{async_trait, operation, Execute, ExecutionResult};

/// List all columns in display order
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct ListColumns;

operation!(
    ListColumns,
    verb = "list",
    noun = "columns",
    description = "List all lists in display order"
);

#[async_trait]
impl Execute<BoardContext, BoardError> for ListColumns {
    type Output = Vec<Column>;

    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Vec<Column>, BoardError> {
        let value = ctx.read().await.store.columns().cloned().collect();
        ExecutionResult::Unlogged { value }
    }
}
