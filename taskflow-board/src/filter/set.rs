//! SetFilters and SetSearch commands

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::types::FilterCriteria;
use serde::{Deserialize, Serialize};
use taskflow_operations::{async_trait, operation, Execute, ExecutionResult};
use tracing::debug;

/// Replace the board's active filter criteria
///
/// Filters are view state: changing them records no activity.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SetFilters {
    pub criteria: FilterCriteria,
}

operation!(
    SetFilters,
    verb = "set",
    noun = "filters",
    description = "Replace the active filter criteria"
);

impl SetFilters {
    pub fn new(criteria: FilterCriteria) -> Self {
        Self { criteria }
    }

    /// Build from the raw form values, where `"all"` disables a filter
    pub fn from_values(search: &str, priority: &str, date: &str, assignee: &str) -> Self {
        Self::new(FilterCriteria::from_values(search, priority, date, assignee))
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for SetFilters {
    type Output = FilterCriteria;

    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<FilterCriteria, BoardError> {
        let mut state = ctx.write().await;
        debug!(criteria = ?self.criteria, "Setting filters");
        state.filters = self.criteria.clone();
        ExecutionResult::Unlogged {
            value: state.filters.clone(),
        }
    }
}

/// Update only the search text of the active filters
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SetSearch {
    pub search: String,
}

operation!(
    SetSearch,
    verb = "set",
    noun = "search",
    description = "Update the search text filter"
);

impl SetSearch {
    pub fn new(search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
        }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for SetSearch {
    type Output = FilterCriteria;

    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<FilterCriteria, BoardError> {
        let mut state = ctx.write().await;
        state.filters.search = self.search.clone();
        ExecutionResult::Unlogged {
            value: state.filters.clone(),
        }
    }
}
