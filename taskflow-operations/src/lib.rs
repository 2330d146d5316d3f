//! # TaskFlow Operations
//!
//! This crate provides the `Operation` trait for defining board commands.
//! Commands are structs where the fields ARE the parameters - no duplication.
//!
//! ## Example
//!
//! ```ignore
//! use taskflow_operations::*;
//!
//! #[derive(Debug)]
//! pub struct AddTask {
//!     /// The task title
//!     pub title: String,
//! }
//!
//! operation!(AddTask, verb = "add", noun = "task", description = "Create a new task");
//!
//! #[async_trait]
//! impl Execute<BoardContext, BoardError> for AddTask {
//!     type Output = Task;
//!
//!     async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Task, BoardError> {
//!         // mutate, then return ExecutionResult::Logged with a LogEntry
//!     }
//! }
//! ```

mod execution_result;
mod log;
mod operation;
mod processor;

pub use execution_result::ExecutionResult;
pub use log::LogEntry;
pub use operation::{Execute, Operation};
pub use processor::OperationProcessor;

// Re-export for use in implementations
pub use async_trait::async_trait;
pub use serde_json::Value;
