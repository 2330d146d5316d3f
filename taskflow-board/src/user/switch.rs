//! SwitchUser command

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::types::User;
use serde::{Deserialize, Serialize};
use taskflow_operations::{async_trait, operation, Execute, ExecutionResult, LogEntry, Operation};

/// Make another roster user the current one
///
/// The activity entry is attributed to the new user, since the processor
/// resolves the actor after the switch has committed.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SwitchUser {
    pub name: String,
}

operation!(
    SwitchUser,
    verb = "switch",
    noun = "user",
    description = "Switch the user viewing the board"
);

impl SwitchUser {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for SwitchUser {
    type Output = User;

    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<User, BoardError> {
        let start = std::time::Instant::now();
        let mut state = ctx.write().await;

        match state.session.switch_to(&self.name) {
            Ok(user) => ExecutionResult::Logged {
                log_entry: LogEntry::new(
                    self.op_string(),
                    format!("{} started viewing the board", user.name),
                    None,
                    start.elapsed().as_millis() as u64,
                ),
                value: user.clone(),
            },
            Err(error) => ExecutionResult::failed(error),
        }
    }
}
