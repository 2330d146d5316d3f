//! User session commands

mod list;
mod switch;

pub use list::{GetCurrentUser, ListAssignees, ListUsers};
pub use switch::SwitchUser;
