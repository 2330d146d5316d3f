//! ListActivity command

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::types::ActivityEntry;
use serde::{Deserialize, Serialize};
use taskflow_operations::{async_trait, operation, Execute, ExecutionResult};

/// Recent activity, newest first
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct ListActivity {
    /// Entries to return; the configured display count when unset
    pub limit: Option<usize>,
}

operation!(
    ListActivity,
    verb = "list",
    noun = "activity",
    description = "List recent board activity"
);

impl ListActivity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for ListActivity {
    type Output = Vec<ActivityEntry>;

    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Vec<ActivityEntry>, BoardError> {
        let limit = self.limit.unwrap_or(ctx.config().activity_display);
        ExecutionResult::Unlogged {
            value: ctx.read_activity(Some(limit)).await,
        }
    }
}
