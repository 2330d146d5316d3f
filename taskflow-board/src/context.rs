//! BoardContext - owner of all in-memory board state
//!
//! The context provides access to state and utilities. No business logic
//! methods, just data access primitives. Commands do all the work.

use crate::config::BoardConfig;
use crate::defaults::default_columns;
use crate::error::Result;
use crate::filter;
use crate::session::UserSession;
use crate::store::EntityStore;
use crate::types::{ActivityEntry, ActivityLog, FilterCriteria, User};
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

/// Everything a board session holds
#[derive(Debug)]
pub struct BoardState {
    pub store: EntityStore,
    pub session: UserSession,
    /// The single active filter set
    pub filters: FilterCriteria,
    pub theme: String,
    pub activity: ActivityLog,
}

/// Context passed to every command - provides access, not logic
pub struct BoardContext {
    state: RwLock<BoardState>,
    op_lock: Arc<Mutex<()>>,
    config: BoardConfig,
}

impl BoardContext {
    /// Open a board: default columns, seed roster, optional demo tasks
    pub fn new(config: BoardConfig) -> Result<Self> {
        config.validate()?;

        let mut store = EntityStore::new();
        for column in default_columns() {
            store.insert_column(column);
        }
        if config.demo_tasks {
            for task in crate::defaults::demo_tasks(filter::today()) {
                store.insert_task(task);
            }
        }

        let state = BoardState {
            store,
            session: UserSession::new(config.users.clone())?,
            filters: FilterCriteria::all(),
            theme: config.theme.clone(),
            activity: ActivityLog::new(config.activity_capacity),
        };
        debug!(
            tasks = state.store.task_count(),
            users = state.session.roster().len(),
            "Opened board"
        );

        Ok(Self {
            state: RwLock::new(state),
            op_lock: Arc::new(Mutex::new(())),
            config,
        })
    }

    /// Open a board with the built-in defaults
    pub fn with_defaults() -> Result<Self> {
        Self::new(BoardConfig::default())
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    // =========================================================================
    // State access
    // =========================================================================

    /// Shared access for read-only commands
    pub async fn read(&self) -> RwLockReadGuard<'_, BoardState> {
        self.state.read().await
    }

    /// Exclusive access; hold the guard for the whole mutation
    pub async fn write(&self) -> RwLockWriteGuard<'_, BoardState> {
        self.state.write().await
    }

    /// The user currently viewing the board
    pub async fn current_user(&self) -> User {
        self.read().await.session.current().clone()
    }

    // =========================================================================
    // Activity
    // =========================================================================

    /// Record an activity entry
    pub async fn append_activity(&self, entry: ActivityEntry) {
        self.write().await.activity.push(entry);
    }

    /// Read activity entries, newest first
    pub async fn read_activity(&self, limit: Option<usize>) -> Vec<ActivityEntry> {
        let state = self.read().await;
        state.activity.recent(limit.unwrap_or(state.activity.len()))
    }

    // =========================================================================
    // Locking
    // =========================================================================

    /// Acquire the operation lock
    ///
    /// Processed commands hold this across execution and the log write, so a
    /// mutation and its activity entry commit as one step.
    pub async fn lock(&self) -> BoardLock {
        BoardLock {
            _guard: self.op_lock.clone().lock_owned().await,
        }
    }
}

/// Guard for the operation lock; released on drop
pub struct BoardLock {
    _guard: OwnedMutexGuard<()>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_new_board_has_default_columns() {
        let ctx = BoardContext::with_defaults().unwrap();
        let state = ctx.read().await;
        let ids: Vec<_> = state.store.columns().map(|c| c.id.to_string()).collect();
        assert_eq!(ids, vec!["todo", "inProgress", "done"]);
        assert_eq!(state.store.task_count(), 0);
        assert_eq!(state.theme, "default");
    }

    #[tokio::test]
    async fn test_demo_tasks_seeded_without_activity() {
        let ctx = BoardContext::new(BoardConfig::default().with_demo_tasks(true)).unwrap();
        assert_eq!(ctx.read().await.store.task_count(), 5);
        assert!(ctx.read_activity(None).await.is_empty());
    }

    #[tokio::test]
    async fn test_activity_capacity_from_config() {
        let ctx = BoardContext::new(BoardConfig::default().with_activity_capacity(2)).unwrap();
        for i in 0..3 {
            ctx.append_activity(ActivityEntry::new("Alice Johnson", &format!("e{i}")))
                .await;
        }
        let entries = ctx.read_activity(None).await;
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].message, "Alice Johnson: e2");
    }

    #[tokio::test]
    async fn test_invalid_config_rejected() {
        let config = BoardConfig::default().with_users(Vec::new());
        assert!(BoardContext::new(config).is_err());
    }
}
