//! Execution result types for operations

use crate::LogEntry;

/// Result of executing an operation
///
/// Distinguishes between:
/// - Logged: commands that changed state and should appear in the activity log
/// - Unlogged: reads, and mutations that turned out to be no-ops
/// - Failed: errors (optionally logged)
#[derive(Debug)]
pub enum ExecutionResult<T, E> {
    /// Operation succeeded and should be logged
    Logged { value: T, log_entry: LogEntry },
    /// Operation succeeded but no logging needed
    Unlogged { value: T },
    /// Operation failed
    Failed {
        error: E,
        log_entry: Option<LogEntry>,
    },
}

impl<T, E> ExecutionResult<T, E> {
    /// Build a failure that leaves no trace in the activity log
    pub fn failed(error: E) -> Self {
        Self::Failed {
            error,
            log_entry: None,
        }
    }

    /// Extract the result (Ok or Err)
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Logged { value, .. } => Ok(value),
            Self::Unlogged { value } => Ok(value),
            Self::Failed { error, .. } => Err(error),
        }
    }

    /// Get the value and log entry separately
    pub fn split(self) -> (Result<T, E>, Option<LogEntry>) {
        match self {
            Self::Logged { value, log_entry } => (Ok(value), Some(log_entry)),
            Self::Unlogged { value } => (Ok(value), None),
            Self::Failed { error, log_entry } => (Err(error), log_entry),
        }
    }

    /// Check if this should be logged
    pub fn should_log(&self) -> bool {
        matches!(
            self,
            Self::Logged { .. }
                | Self::Failed {
                    log_entry: Some(_),
                    ..
                }
        )
    }

    /// Transform the success value, keeping any log entry
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ExecutionResult<U, E> {
        match self {
            Self::Logged { value, log_entry } => ExecutionResult::Logged {
                value: f(value),
                log_entry,
            },
            Self::Unlogged { value } => ExecutionResult::Unlogged { value: f(value) },
            Self::Failed { error, log_entry } => ExecutionResult::Failed { error, log_entry },
        }
    }
}

impl<T, E> From<Result<T, E>> for ExecutionResult<T, E> {
    /// Read-only commands: success is unlogged, failure is unlogged
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Unlogged { value },
            Err(error) => Self::failed(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_log() {
        let logged: ExecutionResult<u32, String> = ExecutionResult::Logged {
            value: 1,
            log_entry: LogEntry::new("add task", "Created task \"x\"", None, 0),
        };
        assert!(logged.should_log());

        let unlogged: ExecutionResult<u32, String> = ExecutionResult::Unlogged { value: 1 };
        assert!(!unlogged.should_log());

        let failed: ExecutionResult<u32, String> = ExecutionResult::failed("boom".into());
        assert!(!failed.should_log());
    }

    #[test]
    fn test_map_keeps_log_entry() {
        let logged: ExecutionResult<u32, String> = ExecutionResult::Logged {
            value: 2,
            log_entry: LogEntry::new("add task", "Created task \"x\"", None, 0),
        };
        let (value, entry) = logged.map(|v| v * 10).split();
        assert_eq!(value, Ok(20));
        assert!(entry.is_some());
    }

    #[test]
    fn test_from_result() {
        let ok: ExecutionResult<u32, String> = Ok(3).into();
        assert!(matches!(ok, ExecutionResult::Unlogged { value: 3 }));

        let err: ExecutionResult<u32, String> = Err("nope".to_string()).into();
        assert_eq!(err.into_result(), Err("nope".to_string()));
    }
}
