//! Core types for the board engine

mod board;
mod export;
mod filter;
mod ids;
mod log;
mod task;

// Re-export all types
pub use board::{Column, User};
pub use export::BoardExport;
pub use filter::{DateFilter, FilterCriteria, PriorityFilter};
pub use ids::{ColumnId, TaskId};
pub use log::{activity_time_label, ActivityEntry, ActivityLog, DEFAULT_ACTIVITY_CAPACITY};
pub use task::{Priority, Task};
