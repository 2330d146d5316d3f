//! Calendar commands: GetCalendarMonth, ListTasksDue

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::filter;
use crate::types::Task;
use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use taskflow_operations::{async_trait, operation, Execute, ExecutionResult};

/// One day cell of the month grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// Tasks due on this date, in any column
    pub task_count: usize,
    pub is_today: bool,
}

/// A month laid out for a Sunday-first calendar grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
    /// `October 2025`
    pub label: String,
    /// Empty cells before the first day
    pub leading_blanks: u32,
    pub days: Vec<CalendarDay>,
}

impl CalendarMonth {
    /// Lay out the month of `first` with due counts from `tasks`
    pub fn build<'a>(
        first: NaiveDate,
        tasks: impl IntoIterator<Item = &'a Task> + Clone,
        today: NaiveDate,
    ) -> Self {
        let days = first
            .iter_days()
            .take_while(|d| d.month() == first.month())
            .map(|date| CalendarDay {
                date,
                task_count: tasks
                    .clone()
                    .into_iter()
                    .filter(|t| t.due_date == Some(date))
                    .count(),
                is_today: date == today,
            })
            .collect();

        Self {
            year: first.year(),
            month: first.month(),
            label: first.format("%B %Y").to_string(),
            leading_blanks: first.weekday().num_days_from_sunday(),
            days,
        }
    }

    /// Days with at least one task due
    pub fn busy_days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.days.iter().filter(|d| d.task_count > 0)
    }
}

/// The month grid for a year and month, or the current month
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct GetCalendarMonth {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

operation!(
    GetCalendarMonth,
    verb = "get",
    noun = "calendar",
    description = "Get the calendar for a month with due-task counts"
);

impl GetCalendarMonth {
    /// The month containing today
    pub fn current() -> Self {
        Self::default()
    }

    pub fn new(year: i32, month: u32) -> Self {
        Self {
            year: Some(year),
            month: Some(month),
        }
    }

    /// The month `delta` months away from `self`, relative to `today` when unset
    pub fn shifted(&self, delta: i32, today: NaiveDate) -> Option<Self> {
        let first = self.first_day(today)?;
        let moved = if delta >= 0 {
            first.checked_add_months(Months::new(delta.unsigned_abs()))
        } else {
            first.checked_sub_months(Months::new(delta.unsigned_abs()))
        }?;
        Some(Self::new(moved.year(), moved.month()))
    }

    fn first_day(&self, today: NaiveDate) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(
            self.year.unwrap_or(today.year()),
            self.month.unwrap_or(today.month()),
            1,
        )
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for GetCalendarMonth {
    type Output = CalendarMonth;

    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<CalendarMonth, BoardError> {
        let today = filter::today();
        let Some(first) = self.first_day(today) else {
            return ExecutionResult::failed(BoardError::missing_field("valid month"));
        };

        let state = ctx.read().await;
        let tasks: Vec<&Task> = state.store.tasks().collect();
        ExecutionResult::Unlogged {
            value: CalendarMonth::build(first, tasks.iter().copied(), today),
        }
    }
}

/// Tasks due on one date, in storage order
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListTasksDue {
    pub date: NaiveDate,
}

operation!(
    ListTasksDue,
    verb = "list",
    noun = "due",
    description = "List the tasks due on a date"
);

impl ListTasksDue {
    pub fn on(date: NaiveDate) -> Self {
        Self { date }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for ListTasksDue {
    type Output = Vec<Task>;

    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Vec<Task>, BoardError> {
        let value = ctx
            .read()
            .await
            .store
            .tasks()
            .filter(|t| t.due_date == Some(self.date))
            .cloned()
            .collect();
        ExecutionResult::Unlogged { value }
    }
}
