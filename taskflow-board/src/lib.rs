//! In-memory kanban board engine
//!
//! This crate holds the state of a single TaskFlow board for the lifetime of a
//! session: tasks grouped into columns (lists), a filter set narrowing what is
//! visible, a small user roster and a bounded activity history. Nothing is
//! durable except the JSON document produced by an export.
//!
//! ## Overview
//!
//! - **Commands are structs** - every operation is a struct implementing `Execute`
//! - **One owner** - `BoardContext` owns all state behind a lock; commands borrow it
//! - **All-or-nothing** - failed commands leave the board untouched
//! - **Attributed history** - the processor records each committed mutation under
//!   the user viewing the board at commit time
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use taskflow_board::{
//!     task::{AddTask, MoveTask}, BoardContext, BoardOperationProcessor, OperationProcessor,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let ctx = BoardContext::with_defaults()?;
//! let processor = BoardOperationProcessor::new();
//!
//! let task = processor
//!     .process(&AddTask::new("Write release notes"), &ctx)
//!     .await?;
//! processor
//!     .process(&MoveTask::new(&task.id, "todo", "inProgress"), &ctx)
//!     .await?;
//!
//! for entry in ctx.read_activity(Some(10)).await {
//!     println!("{}", entry.message);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Executing a command directly (`command.execute(&ctx)`) applies the change
//! but skips the activity log; go through the processor for attributed history.

pub mod config;
mod context;
pub mod defaults;
mod error;
pub mod filter;
mod processor;
mod session;
mod store;
pub mod types;

// Command modules
pub mod activity;
pub mod board;
pub mod column;
pub mod task;
pub mod user;

// Re-export Execute trait and types from operations crate
pub use taskflow_operations::{
    async_trait, Execute, ExecutionResult, LogEntry, Operation, OperationProcessor,
};

pub use config::BoardConfig;
pub use context::{BoardContext, BoardLock, BoardState};
pub use error::{BoardError, Result};
pub use processor::BoardOperationProcessor;
pub use session::UserSession;
pub use store::EntityStore;

// Re-export commonly used types
pub use types::{
    ActivityEntry, ActivityLog, BoardExport, Column, ColumnId, DateFilter, FilterCriteria,
    Priority, PriorityFilter, Task, TaskId, User,
};
