//! Filter engine: derives the visible task subset of a column
//!
//! Everything here is a pure function of the tasks, the criteria and the
//! date taken as "today". Nothing is cached; callers recompute on every view.
//!
//! Stages run in a fixed order, each narrowing the previous result:
//! column, search text, priority, due-date bucket, assignee. Storage order is
//! preserved; no sort is applied.

mod clear;
mod due;
mod set;

pub use clear::ClearFilters;
pub use due::{due_label, due_urgency, DueUrgency};
pub use set::{SetFilters, SetSearch};

use crate::types::{ColumnId, DateFilter, FilterCriteria, Task};
use chrono::{Duration, Local, NaiveDate};

/// The local calendar date, time truncated
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Tasks of `column` that pass every active filter, in storage order
pub fn visible_tasks<'a, I>(
    tasks: I,
    column: &ColumnId,
    criteria: &FilterCriteria,
    today: NaiveDate,
) -> Vec<Task>
where
    I: IntoIterator<Item = &'a Task>,
{
    let needle = criteria.search.to_lowercase();
    tasks
        .into_iter()
        .filter(|t| &t.status == column)
        .filter(|t| needle.is_empty() || t.matches_text(&needle))
        .filter(|t| {
            criteria
                .priority
                .as_ref()
                .is_none_or(|p| p.matches(t.priority))
        })
        .filter(|t| matches_date(t, &criteria.date, today))
        .filter(|t| {
            criteria
                .assignee
                .as_deref()
                .is_none_or(|a| t.assignee == a)
        })
        .cloned()
        .collect()
}

/// Whether a task falls into a due-date bucket
///
/// Tasks without a due date never match a concrete bucket. An unrecognized
/// bucket lets every task through, dated or not.
pub fn matches_date(task: &Task, bucket: &DateFilter, today: NaiveDate) -> bool {
    if matches!(bucket, DateFilter::All | DateFilter::Unrecognized(_)) {
        return true;
    }
    let Some(due) = task.due_date else {
        return false;
    };

    match bucket {
        DateFilter::Overdue => due < today,
        DateFilter::Today => due == today,
        DateFilter::Week => due >= today && due <= today + Duration::days(7),
        DateFilter::All | DateFilter::Unrecognized(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Priority;

    fn day(offset: i64) -> NaiveDate {
        base() + Duration::days(offset)
    }

    fn base() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 31).unwrap()
    }

    fn dated(title: &str, offset: Option<i64>) -> Task {
        let task = Task::new(title, "todo");
        match offset {
            Some(o) => task.with_due_date(day(o)),
            None => task,
        }
    }

    fn titles(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.title.as_str()).collect()
    }

    fn dated_set() -> Vec<Task> {
        vec![
            dated("yesterday", Some(-1)),
            dated("today", Some(0)),
            dated("in three", Some(3)),
            dated("in ten", Some(10)),
            dated("undated", None),
        ]
    }

    #[test]
    fn test_overdue_bucket() {
        let tasks = dated_set();
        let criteria = FilterCriteria::all().with_date(DateFilter::Overdue);
        let visible = visible_tasks(&tasks, &"todo".into(), &criteria, base());
        assert_eq!(titles(&visible), vec!["yesterday"]);
    }

    #[test]
    fn test_week_bucket() {
        let tasks = dated_set();
        let criteria = FilterCriteria::all().with_date(DateFilter::Week);
        let visible = visible_tasks(&tasks, &"todo".into(), &criteria, base());
        assert_eq!(titles(&visible), vec!["today", "in three"]);
    }

    #[test]
    fn test_week_bucket_is_inclusive() {
        let tasks = vec![dated("edge", Some(7)), dated("past edge", Some(8))];
        let criteria = FilterCriteria::all().with_date(DateFilter::Week);
        let visible = visible_tasks(&tasks, &"todo".into(), &criteria, base());
        assert_eq!(titles(&visible), vec!["edge"]);
    }

    #[test]
    fn test_today_bucket() {
        let tasks = dated_set();
        let criteria = FilterCriteria::all().with_date(DateFilter::Today);
        let visible = visible_tasks(&tasks, &"todo".into(), &criteria, base());
        assert_eq!(titles(&visible), vec!["today"]);
    }

    #[test]
    fn test_unrecognized_bucket_passes_through() {
        let tasks = dated_set();
        let criteria = FilterCriteria::all().with_date(DateFilter::Unrecognized("month".into()));
        let visible = visible_tasks(&tasks, &"todo".into(), &criteria, base());
        assert_eq!(visible.len(), 5);
    }

    #[test]
    fn test_column_selection_and_order() {
        let tasks = vec![
            Task::new("first", "todo"),
            Task::new("elsewhere", "done"),
            Task::new("second", "todo"),
        ];
        let visible = visible_tasks(&tasks, &"todo".into(), &FilterCriteria::all(), base());
        assert_eq!(titles(&visible), vec!["first", "second"]);
    }

    #[test]
    fn test_search_matches_title_or_description() {
        let tasks = vec![
            Task::new("Write API Documentation", "todo"),
            Task::new("Setup pipeline", "todo").with_description("Deploy the api gateway"),
            Task::new("Design", "todo"),
        ];
        let criteria = FilterCriteria::all().with_search("API");
        let visible = visible_tasks(&tasks, &"todo".into(), &criteria, base());
        assert_eq!(titles(&visible), vec!["Write API Documentation", "Setup pipeline"]);
    }

    #[test]
    fn test_priority_filter_is_exact() {
        let tasks = vec![
            Task::new("low", "todo").with_priority(Priority::Low),
            Task::new("high", "todo").with_priority(Priority::High),
        ];
        let visible_for = |value: &str| {
            let criteria = FilterCriteria::from_values("", value, "all", "all");
            visible_tasks(&tasks, &"todo".into(), &criteria, base())
        };

        assert_eq!(titles(&visible_for("High")), vec!["high"]);
        assert!(visible_for("high").is_empty());
        assert!(visible_for("Urgent").is_empty());
        assert_eq!(visible_for("all").len(), 2);
    }

    #[test]
    fn test_stages_are_conjunctive() {
        let tasks = vec![
            Task::new("a", "todo")
                .with_priority(Priority::High)
                .with_assignee("Bob Smith"),
            Task::new("b", "todo")
                .with_priority(Priority::High)
                .with_assignee("Alice Johnson"),
            Task::new("c", "todo")
                .with_priority(Priority::Low)
                .with_assignee("Bob Smith"),
        ];
        let criteria = FilterCriteria::all()
            .with_priority(Priority::High)
            .with_assignee("Bob Smith");
        let visible = visible_tasks(&tasks, &"todo".into(), &criteria, base());
        assert_eq!(titles(&visible), vec!["a"]);
    }
}
