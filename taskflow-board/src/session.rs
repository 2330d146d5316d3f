//! The fixed user roster and who is currently viewing the board

use crate::error::{BoardError, Result};
use crate::types::User;

/// Roster of known users with one marked current
///
/// Not authenticated; switching only changes attribution of later activity.
#[derive(Debug, Clone)]
pub struct UserSession {
    roster: Vec<User>,
    current: usize,
}

impl UserSession {
    /// Start a session with the first roster entry as the current user
    pub fn new(roster: Vec<User>) -> Result<Self> {
        if roster.is_empty() {
            return Err(BoardError::config("user roster must not be empty"));
        }
        Ok(Self { roster, current: 0 })
    }

    pub fn current(&self) -> &User {
        &self.roster[self.current]
    }

    pub fn roster(&self) -> &[User] {
        &self.roster
    }

    pub fn find(&self, name: &str) -> Option<&User> {
        self.roster.iter().find(|u| u.name == name)
    }

    /// Make `name` the current user
    pub fn switch_to(&mut self, name: &str) -> Result<&User> {
        let index = self
            .roster
            .iter()
            .position(|u| u.name == name)
            .ok_or_else(|| BoardError::UserNotFound {
                name: name.to_string(),
            })?;
        self.current = index;
        Ok(&self.roster[index])
    }

    /// Distinct user names in roster order, for the assignee filter
    pub fn assignee_options(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::with_capacity(self.roster.len());
        for user in &self.roster {
            if !names.contains(&user.name) {
                names.push(user.name.clone());
            }
        }
        names
    }
}
