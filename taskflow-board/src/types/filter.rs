//! Filter criteria applied to every column of the board

use super::task::Priority;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Due-date bucket relative to today
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateFilter {
    #[default]
    All,
    /// Due strictly before today
    Overdue,
    /// Due exactly today
    Today,
    /// Due between today and today + 7 days, inclusive
    Week,
    /// A bucket name this engine does not know; filters nothing
    ///
    /// Tasks without a due date pass too. The board this engine replaces
    /// dropped undated tasks for any bucket other than `all`.
    #[serde(untagged)]
    Unrecognized(String),
}

impl FromStr for DateFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "" | "all" => Self::All,
            "overdue" => Self::Overdue,
            "today" => Self::Today,
            "week" => Self::Week,
            other => Self::Unrecognized(other.to_string()),
        })
    }
}

/// Exact priority a task must have to stay visible
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriorityFilter {
    Is(Priority),
    /// A value naming no priority; no task matches it
    Unrecognized(String),
}

impl PriorityFilter {
    /// Case-sensitive match against the priority names
    pub fn from_value(value: &str) -> Self {
        match value.parse() {
            Ok(priority) => Self::Is(priority),
            Err(_) => Self::Unrecognized(value.to_string()),
        }
    }

    pub fn matches(&self, priority: Priority) -> bool {
        matches!(self, Self::Is(p) if *p == priority)
    }
}

impl From<Priority> for PriorityFilter {
    fn from(priority: Priority) -> Self {
        Self::Is(priority)
    }
}

/// The conjunctive set of predicates narrowing visible tasks
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against title and description
    #[serde(default)]
    pub search: String,
    /// `None` shows every priority
    #[serde(default)]
    pub priority: Option<PriorityFilter>,
    #[serde(default)]
    pub date: DateFilter,
    /// `None` shows every assignee
    #[serde(default)]
    pub assignee: Option<String>,
}

impl FilterCriteria {
    /// Criteria that let every task through
    pub fn all() -> Self {
        Self::default()
    }

    /// Build criteria from raw form values where `"all"` disables a filter
    ///
    /// An unknown priority value is kept and hides every task.
    pub fn from_values(search: &str, priority: &str, date: &str, assignee: &str) -> Self {
        let priority = match priority {
            "" | "all" => None,
            other => Some(PriorityFilter::from_value(other)),
        };
        let assignee = match assignee {
            "" | "all" => None,
            other => Some(other.to_string()),
        };
        Self {
            search: search.to_string(),
            priority,
            date: date.parse().unwrap_or_default(),
            assignee,
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority.into());
        self
    }

    pub fn with_date(mut self, date: DateFilter) -> Self {
        self.date = date;
        self
    }

    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    /// True when no predicate is active
    pub fn is_empty(&self) -> bool {
        self.search.is_empty()
            && self.priority.is_none()
            && self.date == DateFilter::All
            && self.assignee.is_none()
    }
}
