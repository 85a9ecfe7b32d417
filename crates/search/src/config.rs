//! Search configuration via `taskdeck.toml`
//!
//! The index itself is volatile; the only tunables are result limits.
//! A default file can be written next to the application's other settings
//! and edited before restart.

use crate::index::DEFAULT_LIMIT;
use serde::{Deserialize, Serialize};
use std::path::Path;
use taskdeck_core::{Error, Result};

/// Config file name.
pub const CONFIG_FILE_NAME: &str = "taskdeck.toml";

/// Search configuration loaded from `taskdeck.toml`.
///
/// # Example
///
/// ```toml
/// default_limit = 10
/// # max_limit = 50
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Number of ids returned when a search does not specify a limit.
    #[serde(default = "default_limit")]
    pub default_limit: usize,
    /// Upper bound applied to caller-supplied limits. `None` means unbounded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_limit: Option<usize>,
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: None,
        }
    }
}

impl IndexConfig {
    /// Resolve the number of ids a search should return.
    ///
    /// Both configured limits are treated as at least 1, so a config built
    /// in code without [`validate`](Self::validate) still returns results.
    /// An explicit `Some(0)` yields 0.
    pub fn effective_limit(&self, requested: Option<usize>) -> usize {
        let limit = requested.unwrap_or(self.default_limit.max(1));
        match self.max_limit {
            Some(max) => limit.min(max.max(1)),
            None => limit,
        }
    }

    /// Check the limits for consistency.
    ///
    /// # Errors
    ///
    /// Returns an error if `default_limit` is zero or exceeds `max_limit`.
    pub fn validate(&self) -> Result<()> {
        if self.default_limit == 0 {
            return Err(Error::config("default_limit must be at least 1"));
        }
        if let Some(max) = self.max_limit {
            if self.default_limit > max {
                return Err(Error::config(format!(
                    "default_limit ({}) exceeds max_limit ({})",
                    self.default_limit, max
                )));
            }
        }
        Ok(())
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Taskdeck search configuration
#
# Number of ids returned by a search that does not pass `limit` (default: 10)
default_limit = 10

# Upper bound for caller-supplied limits. Omit for no bound.
# max_limit = 50
"#
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: IndexConfig = toml::from_str(&content).map_err(|e| {
            Error::config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml())?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
