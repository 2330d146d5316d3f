//! Board configuration loaded with Figment
//!
//! Sources, lowest to highest precedence:
//! 1. Built-in defaults
//! 2. An optional config file (`.yaml`, `.yml`, `.toml` or `.json`)
//! 3. Environment variables prefixed with `TASKFLOW_`

use crate::defaults::{seed_users, DEFAULT_THEME};
use crate::error::{BoardError, Result};
use crate::types::{User, DEFAULT_ACTIVITY_CAPACITY};
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, trace};

/// Prefix for environment overrides, e.g. `TASKFLOW_THEME=dark`
pub const ENV_PREFIX: &str = "TASKFLOW_";

/// Tunables for a board session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// How many activity entries are retained
    pub activity_capacity: usize,
    /// How many activity entries a listing returns by default
    pub activity_display: usize,
    /// Initial theme name
    pub theme: String,
    /// Seed the board with sample tasks
    pub demo_tasks: bool,
    /// The user roster; the first entry starts as the current user
    pub users: Vec<User>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            activity_capacity: DEFAULT_ACTIVITY_CAPACITY,
            activity_display: 10,
            theme: DEFAULT_THEME.to_string(),
            demo_tasks: false,
            users: seed_users(),
        }
    }
}

impl BoardConfig {
    /// Load defaults merged with environment overrides
    pub fn load() -> Result<Self> {
        Self::extract(Self::figment())
    }

    /// Load defaults, then `path`, then environment overrides
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading board configuration from {}", path.display());

        let file = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Figment::from(Yaml::file(path)),
            Some("toml") => Figment::from(Toml::file(path)),
            Some("json") => Figment::from(Json::file(path)),
            other => {
                return Err(BoardError::config(format!(
                    "unsupported configuration format: {}",
                    other.unwrap_or("<none>")
                )))
            }
        };

        let figment = Figment::new()
            .merge(Serialized::defaults(BoardConfig::default()))
            .merge(file)
            .merge(Env::prefixed(ENV_PREFIX));
        Self::extract(figment)
    }

    fn figment() -> Figment {
        Figment::new()
            .merge(Serialized::defaults(BoardConfig::default()))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    fn extract(figment: Figment) -> Result<Self> {
        let config: BoardConfig = figment
            .extract()
            .map_err(|e| BoardError::config(e.to_string()))?;
        config.validate()?;
        trace!(?config, "Board configuration resolved");
        Ok(config)
    }

    /// Reject values the board cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.activity_capacity == 0 {
            return Err(BoardError::config("activity_capacity must be at least 1"));
        }
        if self.users.is_empty() {
            return Err(BoardError::config("users must contain at least one user"));
        }
        Ok(())
    }

    pub fn with_demo_tasks(mut self, demo_tasks: bool) -> Self {
        self.demo_tasks = demo_tasks;
        self
    }

    pub fn with_activity_capacity(mut self, capacity: usize) -> Self {
        self.activity_capacity = capacity;
        self
    }

    pub fn with_users(mut self, users: Vec<User>) -> Self {
        self.users = users;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_file(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    #[serial]
    fn test_defaults() {
        let config = BoardConfig::load().unwrap();
        assert_eq!(config.activity_capacity, 50);
        assert_eq!(config.activity_display, 10);
        assert_eq!(config.theme, "default");
        assert_eq!(config.users.len(), 3);
        assert!(!config.demo_tasks);
    }

    #[test]
    #[serial]
    fn test_yaml_file_overrides_defaults() {
        let file = config_file(
            ".yaml",
            "theme: ocean\ndemo_tasks: true\nusers:\n  - name: Dana Lee\n    email: dana@taskflow.com\n",
        );
        let config = BoardConfig::load_from(file.path()).unwrap();
        assert_eq!(config.theme, "ocean");
        assert!(config.demo_tasks);
        assert_eq!(config.users, vec![User::new("Dana Lee", "dana@taskflow.com")]);
        assert_eq!(config.activity_capacity, 50);
    }

    #[test]
    #[serial]
    fn test_toml_file() {
        let file = config_file(".toml", "activity_capacity = 20\n");
        let config = BoardConfig::load_from(file.path()).unwrap();
        assert_eq!(config.activity_capacity, 20);
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        let file = config_file(".yaml", "theme: ocean\n");
        std::env::set_var("TASKFLOW_THEME", "dark");
        let config = BoardConfig::load_from(file.path());
        std::env::remove_var("TASKFLOW_THEME");
        assert_eq!(config.unwrap().theme, "dark");
    }

    #[test]
    #[serial]
    fn test_invalid_values_rejected() {
        let file = config_file(".yaml", "activity_capacity: 0\n");
        let err = BoardConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, BoardError::Config { .. }));

        let file = config_file(".ini", "theme=dark\n");
        assert!(BoardConfig::load_from(file.path()).is_err());
    }
}
