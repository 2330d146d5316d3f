//! Operation processor trait

use crate::{Execute, LogEntry};
use async_trait::async_trait;

/// Runs operations against a context and records their log entries
///
/// Implementations decide where log entries go and how they are attributed.
#[async_trait]
pub trait OperationProcessor<C, E>
where
    C: Send + Sync,
    E: Send,
{
    /// Execute the operation and write its log entry, if any
    async fn process<T>(&self, operation: &T, ctx: &C) -> Result<<T as Execute<C, E>>::Output, E>
    where
        T: Execute<C, E> + Send + Sync;

    /// Persist a log entry produced by an operation
    async fn write_log(&self, ctx: &C, log_entry: LogEntry) -> Result<(), E>;
}
