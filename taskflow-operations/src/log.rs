//! Log entry types for operation tracking

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A log entry recording a committed operation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogEntry {
    /// Unique ID for this log entry (ULID format)
    pub id: String,

    /// When the operation occurred
    pub timestamp: DateTime<Utc>,

    /// Canonical op string (e.g., "add task", "move task")
    pub op: String,

    /// Human readable description of what changed
    pub message: String,

    /// Who performed the operation (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,

    /// How long the operation took (milliseconds)
    pub duration_ms: u64,
}

impl LogEntry {
    /// Create a new log entry
    pub fn new(
        op: impl Into<String>,
        message: impl Into<String>,
        actor: Option<String>,
        duration_ms: u64,
    ) -> Self {
        Self {
            id: ulid::Ulid::new().to_string(),
            timestamp: Utc::now(),
            op: op.into(),
            message: message.into(),
            actor,
            duration_ms,
        }
    }

    /// Set the actor
    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_entry_creation() {
        let entry = LogEntry::new("delete task", "Deleted task \"Ship it\"", None, 3);
        assert_eq!(entry.op, "delete task");
        assert_eq!(entry.id.len(), 26);
        assert!(entry.actor.is_none());

        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("actor").is_none());
    }

    #[test]
    fn test_log_entry_with_actor() {
        let entry = LogEntry::new("add task", "Created task \"x\"", None, 0).with_actor("Bob Smith");
        assert_eq!(entry.actor.as_deref(), Some("Bob Smith"));
    }
}
