//! Due-date urgency and labels shown on task cards

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How pressing a due date is relative to today
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DueUrgency {
    Overdue,
    DueToday,
    None,
}

/// Classify a due date against today
pub fn due_urgency(due: NaiveDate, today: NaiveDate) -> DueUrgency {
    if due < today {
        DueUrgency::Overdue
    } else if due == today {
        DueUrgency::DueToday
    } else {
        DueUrgency::None
    }
}

/// Human label for a due date
///
/// "Overdue by N day(s)", "Due Today", "Due Tomorrow", "Due in N days" up to
/// a week out, otherwise the short month and day (e.g. "Nov 5").
pub fn due_label(due: NaiveDate, today: NaiveDate) -> String {
    let days = (due - today).num_days();
    match days {
        d if d < 0 => {
            let n = d.abs();
            format!("Overdue by {} day{}", n, if n == 1 { "" } else { "s" })
        }
        0 => "Due Today".into(),
        1 => "Due Tomorrow".into(),
        2..=7 => format!("Due in {days} days"),
        _ => due.format("%b %-d").to_string(),
    }
}
