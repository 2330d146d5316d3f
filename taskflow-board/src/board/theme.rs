//! SetTheme command

use crate::context::BoardContext;
use crate::error::BoardError;
use serde::{Deserialize, Serialize};
use taskflow_operations::{async_trait, operation, Execute, ExecutionResult};

/// Change the board theme; presentation only, so nothing is logged
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SetTheme {
    pub theme: String,
}

operation!(
    SetTheme,
    verb = "set",
    noun = "theme",
    description = "Change the board theme"
);

impl SetTheme {
    pub fn new(theme: impl Into<String>) -> Self {
        Self {
            theme: theme.into(),
        }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for SetTheme {
    type Output = String;

    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<String, BoardError> {
        let theme = self.theme.trim();
        if theme.is_empty() {
            return ExecutionResult::failed(BoardError::missing_field("theme"));
        }
        ctx.write().await.theme = theme.to_string();
        ExecutionResult::Unlogged {
            value: theme.to_string(),
        }
    }
}
