//! GetColumn command

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::types::{Column, ColumnId};
use serde::{Deserialize, Serialize};
use taskflow_operations::{async_trait, operation, Execute, ExecutionResult};

/// Get a column by ID
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GetColumn {
    /// The column ID to retrieve
    pub id: ColumnId,
}

operation!(
    GetColumn,
    verb = "get",
    noun = "column",
    description = "Retrieve a list by ID"
);

impl GetColumn {
    pub fn new(id: impl Into<ColumnId>) -> Self {
        Self { id: id.into() }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for GetColumn {
    type Output = Column;

    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Column, BoardError> {
        let state = ctx.read().await;
        let result = state
            .store
            .column(&self.id)
            .cloned()
            .ok_or_else(|| BoardError::ColumnNotFound {
                id: self.id.to_string(),
            });
        result.into()
    }
}
