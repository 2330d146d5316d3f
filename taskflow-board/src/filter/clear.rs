//! ClearFilters command

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::types::FilterCriteria;
use serde::{Deserialize, Serialize};
use taskflow_operations::{async_trait, operation, Execute, ExecutionResult};

/// Reset every filter so all tasks are visible
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct ClearFilters;

operation!(
    ClearFilters,
    verb = "clear",
    noun = "filters",
    description = "Reset all filters"
);

#[async_trait]
impl Execute<BoardContext, BoardError> for ClearFilters {
    type Output = FilterCriteria;

    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<FilterCriteria, BoardError> {
        ctx.write().await.filters = FilterCriteria::all();
        ExecutionResult::Unlogged {
            value: FilterCriteria::all(),
        }
    }
}
