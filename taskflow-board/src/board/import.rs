//! ImportBoard command

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::types::Task;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskflow_operations::{async_trait, operation, Execute, ExecutionResult, LogEntry, Operation};
use tracing::debug;

/// Replace the task collection from an exported document
///
/// The payload is validated in full before anything changes; on failure the
/// board is left untouched.
///
/// Exports carry tasks but not columns, so every task's status must name a
/// column on this board. A file holding tasks from a custom list only imports
/// into a session where that list already exists.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ImportBoard {
    /// Raw JSON text of the document
    pub content: String,
}

operation!(
    ImportBoard,
    verb = "import",
    noun = "board",
    description = "Replace tasks and theme from an exported JSON document"
);

impl ImportBoard {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// What an import replaced
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportSummary {
    pub task_count: usize,
    /// The theme applied, when the document carried one
    pub theme: Option<String>,
}

/// Validate the document shape and pull out tasks and theme
fn parse_document(content: &str) -> Result<(Vec<Task>, Option<String>), BoardError> {
    let mut document: Value = serde_json::from_str(content)?;

    let tasks = match document.get_mut("tasks").map(Value::take) {
        Some(tasks @ Value::Array(_)) => serde_json::from_value::<Vec<Task>>(tasks)
            .map_err(|e| BoardError::malformed_import(format!("invalid task record: {e}")))?,
        Some(_) => return Err(BoardError::malformed_import("`tasks` is not an array")),
        None => return Err(BoardError::malformed_import("missing `tasks`")),
    };

    let theme = document
        .get("theme")
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty())
        .map(str::to_string);

    Ok((tasks, theme))
}

#[async_trait]
impl Execute<BoardContext, BoardError> for ImportBoard {
    type Output = ImportSummary;

    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<ImportSummary, BoardError> {
        let start = std::time::Instant::now();

        let (tasks, theme) = match parse_document(&self.content) {
            Ok(parsed) => parsed,
            Err(error) => return ExecutionResult::failed(error),
        };

        let mut state = ctx.write().await;

        if let Some(orphan) = tasks.iter().find(|t| !state.store.contains_column(&t.status)) {
            return ExecutionResult::failed(BoardError::malformed_import(format!(
                "task {} references unknown list {}",
                orphan.id, orphan.status
            )));
        }

        let task_count = tasks.len();
        state.store.replace_tasks(tasks);
        if let Some(theme) = &theme {
            state.theme = theme.clone();
        }
        debug!(tasks = task_count, theme = ?theme, "Imported board");

        ExecutionResult::Logged {
            log_entry: LogEntry::new(
                self.op_string(),
                "Imported board from file",
                None,
                start.elapsed().as_millis() as u64,
            ),
            value: ImportSummary { task_count, theme },
        }
    }
}
