//! Activity log types

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use taskflow_operations::LogEntry;

/// Number of entries kept when no capacity is configured
pub const DEFAULT_ACTIVITY_CAPACITY: usize = 50;

/// One line of the board's activity history
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityEntry {
    /// `"<user>: <description>"`
    pub message: String,
    pub timestamp: DateTime<Utc>,
    /// Name of the acting user
    pub user: String,
}

impl ActivityEntry {
    /// Attribute a description to a user, stamped now
    pub fn new(user: impl Into<String>, description: &str) -> Self {
        let user = user.into();
        Self {
            message: format!("{user}: {description}"),
            timestamp: Utc::now(),
            user,
        }
    }

    /// Build an entry from a committed operation's log entry
    pub fn from_log_entry(user: impl Into<String>, log_entry: &LogEntry) -> Self {
        let mut entry = Self::new(user, &log_entry.message);
        entry.timestamp = log_entry.timestamp;
        entry
    }
}

/// Append-only history capped at a fixed number of entries
///
/// When full, the oldest entries are evicted first.
#[derive(Debug, Clone)]
pub struct ActivityLog {
    entries: VecDeque<ActivityEntry>,
    capacity: usize,
}

impl ActivityLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.saturating_add(1)),
            capacity,
        }
    }

    /// Append an entry, evicting from the front while over capacity
    pub fn push(&mut self, entry: ActivityEntry) {
        self.entries.push_back(entry);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// The most recent `limit` entries, newest first
    pub fn recent(&self, limit: usize) -> Vec<ActivityEntry> {
        self.entries.iter().rev().take(limit).cloned().collect()
    }

    /// All retained entries, oldest first
    pub fn entries(&self) -> impl Iterator<Item = &ActivityEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::new(DEFAULT_ACTIVITY_CAPACITY)
    }
}

/// Relative age label for an activity timestamp
///
/// `Just now` under a minute, `<N>m ago` under an hour, `<N>h ago` under a
/// day, otherwise the local date as `M/D/YYYY`.
pub fn activity_time_label(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - timestamp).num_minutes();
    if minutes < 1 {
        return "Just now".into();
    }
    if minutes < 60 {
        return format!("{minutes}m ago");
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("{hours}h ago");
    }
    timestamp
        .with_timezone(&Local)
        .format("%-m/%-d/%Y")
        .to_string()
}
