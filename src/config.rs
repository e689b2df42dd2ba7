//! Top-level application configuration.
//!
//! Configuration lives in `config.json` under the platform config
//! directory (`~/.config/deskview` on Linux) and covers:
//! - Pager shape: page size and page range
//! - Path to the ticket data file
//! - Whether the notification panel starts enabled
//!
//! `DESKVIEW_CONFIG` overrides the config file path and `DESKVIEW_DATA`
//! overrides the ticket file, both mainly for tests and demos.

use std::env;
use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{DeskError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Tickets shown per page (default: 10)
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Numbered buttons either side of the current page (default: 2)
    #[serde(default = "default_page_range")]
    pub page_range: usize,

    /// Ticket data file; falls back to the built-in seed set when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_path: Option<PathBuf>,

    /// Whether the notification panel is available (default: true)
    #[serde(default = "default_notifications")]
    pub notifications: bool,
}

fn default_page_size() -> usize {
    10
}

fn default_page_range() -> usize {
    2
}

fn default_notifications() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            page_range: default_page_range(),
            data_path: None,
            notifications: default_notifications(),
        }
    }
}

impl Config {
    /// Load configuration, falling back to defaults when no file exists.
    pub fn load() -> Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(&path)?;
        let config: Config = serde_json::from_str(&raw)
            .map_err(|e| DeskError::Config(format!("{}: {}", path.display(), e)))?;
        Ok(config.sanitized())
    }

    /// Path to the config file, honoring `DESKVIEW_CONFIG`.
    pub fn config_path() -> Option<PathBuf> {
        if let Ok(path) = env::var("DESKVIEW_CONFIG") {
            return Some(PathBuf::from(path));
        }
        ProjectDirs::from("", "", "deskview").map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Resolve the ticket data file, honoring `DESKVIEW_DATA`.
    pub fn data_path(&self) -> Option<PathBuf> {
        if let Ok(path) = env::var("DESKVIEW_DATA") {
            return Some(PathBuf::from(path));
        }
        self.data_path.clone()
    }

    /// Clamp nonsense values rather than erroring: a config with
    /// `page_size: 0` would otherwise poison every pager computation.
    fn sanitized(mut self) -> Self {
        if self.page_size == 0 {
            tracing::warn!("page_size 0 in config, using default");
            self.page_size = default_page_size();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    #[test]
    #[serial]
    fn defaults_when_no_file() {
        let dir = tempfile::tempdir().unwrap();
        unsafe { env::set_var("DESKVIEW_CONFIG", dir.path().join("missing.json")) };
        let config = Config::load().unwrap();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.page_range, 2);
        assert!(config.notifications);
        unsafe { env::remove_var("DESKVIEW_CONFIG") };
    }

    #[test]
    #[serial]
    fn loads_partial_config_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut file = fs::File::create(&path).unwrap();
        write!(file, r#"{{ "page_size": 5 }}"#).unwrap();
        unsafe { env::set_var("DESKVIEW_CONFIG", &path) };
        let config = Config::load().unwrap();
        assert_eq!(config.page_size, 5);
        assert_eq!(config.page_range, 2);
        unsafe { env::remove_var("DESKVIEW_CONFIG") };
    }

    #[test]
    #[serial]
    fn zero_page_size_is_sanitized() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "page_size": 0 }"#).unwrap();
        unsafe { env::set_var("DESKVIEW_CONFIG", &path) };
        let config = Config::load().unwrap();
        assert_eq!(config.page_size, 10);
        unsafe { env::remove_var("DESKVIEW_CONFIG") };
    }

    #[test]
    #[serial]
    fn data_env_override_wins() {
        unsafe { env::set_var("DESKVIEW_DATA", "/tmp/tickets.json") };
        let config = Config {
            data_path: Some(PathBuf::from("/elsewhere.json")),
            ..Config::default()
        };
        assert_eq!(config.data_path().unwrap(), PathBuf::from("/tmp/tickets.json"));
        unsafe { env::remove_var("DESKVIEW_DATA") };
    }

    #[test]
    #[serial]
    fn malformed_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ nope").unwrap();
        unsafe { env::set_var("DESKVIEW_CONFIG", &path) };
        assert!(matches!(Config::load(), Err(DeskError::Config(_))));
        unsafe { env::remove_var("DESKVIEW_CONFIG") };
    }
}
