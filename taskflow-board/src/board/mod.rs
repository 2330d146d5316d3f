//! Board-level commands: view, statistics, theme, calendar, import and export

mod calendar;
mod export;
mod get;
mod import;
mod stats;
mod theme;

pub use calendar::{CalendarDay, CalendarMonth, GetCalendarMonth, ListTasksDue};
pub use export::ExportBoard;
pub use get::{BoardView, ColumnView, GetBoard};
pub use import::{ImportBoard, ImportSummary};
pub use stats::{BoardStats, ColumnCount, GetStats};
pub use theme::SetTheme;
