//! Scheduler behaviour switches.
//!
//! Loaded from TOML; every field is optional and falls back to
//! [`SchedulerConfig::default`].
//!
//! ```toml
//! exclude_self_on_reassign = true
//! log_conflicts = false
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// Configuration for a [`ScheduleStore`](crate::store::ScheduleStore).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// When reassigning a lesson, skip its own current booking during
    /// conflict validation.
    ///
    /// With `false` the lesson being moved is compared as a foreign
    /// record, so any reassignment collides with itself on the professor
    /// dimension and is rejected.
    pub exclude_self_on_reassign: bool,
    /// Emit a `warn` event whenever a mutation is rejected by a conflict.
    pub log_conflicts: bool,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            exclude_self_on_reassign: true,
            log_conflicts: true,
        }
    }
}

impl SchedulerConfig {
    /// Configuration reproducing the legacy self-conflicting reassignment.
    pub fn legacy() -> Self {
        Self {
            exclude_self_on_reassign: false,
            ..Self::default()
        }
    }

    /// Parses a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Reads and parses a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Sets whether reassignment ignores the moved lesson's own booking.
    pub fn with_exclude_self_on_reassign(mut self, exclude: bool) -> Self {
        self.exclude_self_on_reassign = exclude;
        self
    }

    /// Sets whether rejected mutations are logged.
    pub fn with_log_conflicts(mut self, log: bool) -> Self {
        self.log_conflicts = log;
        self
    }
}
