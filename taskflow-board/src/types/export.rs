//! Board interchange document

use super::task::Task;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// The document written by an export and read back by an import
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardExport {
    pub tasks: Vec<Task>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_date: Option<DateTime<Utc>>,
}

impl BoardExport {
    /// Snapshot tasks and theme, stamped now
    pub fn new(tasks: Vec<Task>, theme: impl Into<String>) -> Self {
        Self {
            tasks,
            theme: Some(theme.into()),
            export_date: Some(Utc::now()),
        }
    }

    /// Pretty-printed JSON, two-space indented
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Suggested download name for an export made on `date`
    pub fn file_name(date: NaiveDate) -> String {
        format!("taskflow-board-{}.json", date.format("%Y-%m-%d"))
    }
}
