//! EntityStore - canonical task and column collections
//!
//! Pure data access. The store does not validate; commands are responsible
//! for keeping every task's status pointing at an existing column.

use crate::types::{Column, ColumnId, Task, TaskId};
use indexmap::IndexMap;

/// Tasks keyed by id and columns keyed by id, both in insertion order
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    tasks: IndexMap<TaskId, Task>,
    columns: IndexMap<ColumnId, Column>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Tasks
    // =========================================================================

    /// All tasks in storage order
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.values()
    }

    /// Tasks whose status is `column`, in storage order
    pub fn tasks_in<'a>(&'a self, column: &'a ColumnId) -> impl Iterator<Item = &'a Task> {
        self.tasks.values().filter(move |t| &t.status == column)
    }

    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.get(id)
    }

    pub fn task_mut(&mut self, id: &TaskId) -> Option<&mut Task> {
        self.tasks.get_mut(id)
    }

    pub fn contains_task(&self, id: &TaskId) -> bool {
        self.tasks.contains_key(id)
    }

    /// Append a task; an existing task with the same id is replaced in place
    pub fn insert_task(&mut self, task: Task) {
        self.tasks.insert(task.id.clone(), task);
    }

    /// Remove a task, keeping the order of the rest
    pub fn remove_task(&mut self, id: &TaskId) -> Option<Task> {
        self.tasks.shift_remove(id)
    }

    /// Swap in a whole new task collection
    pub fn replace_tasks(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks.into_iter().map(|t| (t.id.clone(), t)).collect();
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    // =========================================================================
    // Columns
    // =========================================================================

    /// All columns in display order
    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.values()
    }

    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.get(id)
    }

    pub fn contains_column(&self, id: &ColumnId) -> bool {
        self.columns.contains_key(id)
    }

    /// Case-insensitive title lookup
    pub fn find_column_by_title(&self, title: &str) -> Option<&Column> {
        self.columns.values().find(|c| c.has_title(title))
    }

    /// Append a column at the end of the display order
    pub fn insert_column(&mut self, column: Column) {
        self.columns.insert(column.id.clone(), column);
    }

    /// Title of a column, or the raw id when the column is unknown
    pub fn column_title(&self, id: &ColumnId) -> String {
        self.columns
            .get(id)
            .map(|c| c.title.clone())
            .unwrap_or_else(|| id.to_string())
    }

    /// Remove a column together with every task that references it
    ///
    /// Both the surviving task set and the removed tasks are computed before
    /// anything is committed, so the store is never left with only one half
    /// of the change. Returns `None` (and changes nothing) if the column does
    /// not exist.
    pub fn remove_column_cascade(&mut self, id: &ColumnId) -> Option<(Column, Vec<Task>)> {
        if !self.columns.contains_key(id) {
            return None;
        }

        let (removed, kept): (Vec<Task>, Vec<Task>) = self
            .tasks
            .values()
            .cloned()
            .partition(|t| &t.status == id);

        let column = self.columns.shift_remove(id)?;
        self.tasks = kept.into_iter().map(|t| (t.id.clone(), t)).collect();
        Some((column, removed))
    }
}
