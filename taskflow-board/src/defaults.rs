//! Built-in seed data: default columns, roster, demo tasks.

use chrono::{Duration, NaiveDate};

use crate::types::{Column, ColumnId, Priority, Task, User};

/// Id of the default "To Do" column; new tasks land here unless told otherwise
pub const TODO_COLUMN: &str = "todo";
/// Id of the default "In Progress" column
pub const IN_PROGRESS_COLUMN: &str = "inProgress";
/// Id of the default "Done" column; tasks here never count as overdue
pub const DONE_COLUMN: &str = "done";

/// Theme applied when nothing else is configured
pub const DEFAULT_THEME: &str = "default";

/// Colors offered for new lists; the first one is the fallback
pub const LIST_COLORS: [&str; 8] = [
    "#3498db", "#e74c3c", "#2ecc71", "#f39c12", "#9b59b6", "#1abc9c", "#34495e", "#e67e22",
];

/// The three permanent columns, in display order
pub fn default_columns() -> Vec<Column> {
    vec![
        Column::default_column(TODO_COLUMN, "To Do", "#3498db"),
        Column::default_column(IN_PROGRESS_COLUMN, "In Progress", "#f39c12"),
        Column::default_column(DONE_COLUMN, "Done", "#27ae60"),
    ]
}

/// The seed roster; the first user is current when a board opens
pub fn seed_users() -> Vec<User> {
    vec![
        User::new("Alice Johnson", "alice@taskflow.com"),
        User::new("Bob Smith", "bob@taskflow.com"),
        User::new("Carol Davis", "carol@taskflow.com"),
    ]
}

/// Sample tasks spread across the default columns, due dates relative to `today`
pub fn demo_tasks(today: NaiveDate) -> Vec<Task> {
    let demo = |title: &str,
                description: &str,
                priority: Priority,
                due_in: i64,
                assignee: &str,
                column: &str| {
        Task::new(title, ColumnId::from_string(column))
            .with_description(description)
            .with_priority(priority)
            .with_due_date(today + Duration::days(due_in))
            .with_assignee(assignee)
    };

    vec![
        demo(
            "Design Landing Page",
            "Create mockups for the new product landing page with focus on conversion",
            Priority::High,
            5,
            "Alice Johnson",
            TODO_COLUMN,
        ),
        demo(
            "Implement Authentication",
            "Add user login and signup functionality with JWT tokens",
            Priority::Critical,
            3,
            "Bob Smith",
            IN_PROGRESS_COLUMN,
        ),
        demo(
            "Write API Documentation",
            "Document all API endpoints with examples and response formats",
            Priority::Medium,
            10,
            "Carol Davis",
            IN_PROGRESS_COLUMN,
        ),
        demo(
            "Setup CI/CD Pipeline",
            "Configure automated testing and deployment workflow",
            Priority::Low,
            15,
            "Alice Johnson",
            DONE_COLUMN,
        ),
        demo(
            "Database Optimization",
            "Optimize slow queries and add proper indexes",
            Priority::High,
            -1,
            "Bob Smith",
            TODO_COLUMN,
        ),
    ]
}
