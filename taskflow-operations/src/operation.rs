//! Operation metadata and execution traits

use crate::ExecutionResult;
use async_trait::async_trait;

/// Static metadata describing a command
///
/// Implemented for command structs through the [`operation!`](crate::operation) macro.
pub trait Operation {
    /// The action, e.g. "add"
    fn verb(&self) -> &'static str;

    /// The entity acted upon, e.g. "task"
    fn noun(&self) -> &'static str;

    /// Human readable summary of what the command does
    fn description(&self) -> &'static str;

    /// Canonical op string (e.g., "add task", "move task")
    fn op_string(&self) -> String {
        format!("{} {}", self.verb(), self.noun())
    }
}

/// Execute a command against a context
///
/// `C` is the context that owns state, `E` the domain error type.
#[async_trait]
pub trait Execute<C, E>: Operation
where
    C: Send + Sync,
    E: Send,
{
    /// The value produced on success
    type Output: Send;

    /// Run the command
    async fn execute(&self, ctx: &C) -> ExecutionResult<Self::Output, E>;
}

/// Implement [`Operation`] for a command struct
///
/// ```ignore
/// operation!(MoveTask, verb = "move", noun = "task", description = "Move a task to another column");
/// ```
#[macro_export]
macro_rules! operation {
    ($ty:ty, verb = $verb:literal, noun = $noun:literal, description = $desc:literal $(,)?) => {
        impl $crate::Operation for $ty {
            fn verb(&self) -> &'static str {
                $verb
            }

            fn noun(&self) -> &'static str {
                $noun
            }

            fn description(&self) -> &'static str {
                $desc
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LogEntry;

    struct Ping;

    crate::operation!(Ping, verb = "ping", noun = "board", description = "Check the board");

    struct Ctx;

    #[async_trait]
    impl Execute<Ctx, String> for Ping {
        type Output = &'static str;

        async fn execute(&self, _ctx: &Ctx) -> ExecutionResult<&'static str, String> {
            ExecutionResult::Logged {
                value: "pong",
                log_entry: LogEntry::new(self.op_string(), "Pinged", None, 0),
            }
        }
    }

    #[test]
    fn test_op_string() {
        assert_eq!(Ping.op_string(), "ping board");
        assert_eq!(Ping.description(), "Check the board");
    }

    #[tokio::test]
    async fn test_execute() {
        let (result, log_entry) = Ping.execute(&Ctx).await.split();
        assert_eq!(result, Ok("pong"));
        assert_eq!(log_entry.map(|e| e.op), Some("ping board".to_string()));
    }
}
