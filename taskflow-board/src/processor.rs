//! Board operation processor
//!
//! Runs commands under the operation lock and appends their log entries to
//! the activity log, attributed to whoever is the current user when the
//! command commits.

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::types::ActivityEntry;
use async_trait::async_trait;
use taskflow_operations::{Execute, LogEntry, OperationProcessor};
use tracing::{info, warn};

/// Processor that records committed commands in the board's activity log
#[derive(Debug, Default)]
pub struct BoardOperationProcessor;

impl BoardOperationProcessor {
    /// Create a new processor
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl OperationProcessor<BoardContext, BoardError> for BoardOperationProcessor {
    async fn process<T>(
        &self,
        operation: &T,
        ctx: &BoardContext,
    ) -> Result<<T as Execute<BoardContext, BoardError>>::Output>
    where
        T: Execute<BoardContext, BoardError> + Send + Sync,
    {
        let _lock = ctx.lock().await;

        let (result, log_entry) = operation.execute(ctx).await.split();
        match &result {
            Ok(_) => {
                if let Some(log_entry) = log_entry {
                    self.write_log(ctx, log_entry).await?;
                }
            }
            Err(error) => {
                warn!(op = %operation.op_string(), %error, "Operation rejected");
            }
        }
        result
    }

    async fn write_log(&self, ctx: &BoardContext, log_entry: LogEntry) -> Result<()> {
        let mut state = ctx.write().await;
        let user = log_entry
            .actor
            .clone()
            .unwrap_or_else(|| state.session.current().name.clone());

        info!(
            op = %log_entry.op,
            user = %user,
            duration_ms = log_entry.duration_ms,
            "{}",
            log_entry.message
        );
        state
            .activity
            .push(ActivityEntry::from_log_entry(user, &log_entry));
        Ok(())
    }
}
