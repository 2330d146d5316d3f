//! Column (list) commands

mod add;
mod delete;
mod get;
mod list;

pub use add::AddColumn;
pub use delete::{ColumnDeletion, DeleteColumn};
pub use get::GetColumn;
pub use list::ListColumns;
