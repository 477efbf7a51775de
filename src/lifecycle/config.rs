//! Builder configuration.
//!
//! Values come from, in increasing priority: built-in defaults, an optional
//! `course-builder.toml` in the working directory, and `COURSE_BUILDER__*`
//! environment variables.
//!
//! ```toml
//! channel_capacity = 64
//! delete_policy = "unassign"
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::store::DeletePolicy;

pub const CONFIG_FILE: &str = "course-builder.toml";
pub const ENV_CHANNEL_CAPACITY: &str = "COURSE_BUILDER__CHANNEL_CAPACITY";
pub const ENV_DELETE_POLICY: &str = "COURSE_BUILDER__DELETE_POLICY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuilderConfig {
    /// Request queue length of the builder actor.
    pub channel_capacity: usize,
    /// Policy for delete-module requests that don't name one.
    pub delete_policy: DeletePolicy,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 32,
            delete_policy: DeletePolicy::Cascade,
        }
    }
}

impl BuilderConfig {
    /// Loads `course-builder.toml` if present, then applies the environment.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Path::new(CONFIG_FILE);
        let config = if path.exists() {
            Self::from_file(path)?
        } else {
            Self::default()
        };
        config.with_overrides(|key| std::env::var(key).ok())
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()
    }

    /// Applies overrides from `lookup`, normally the process environment.
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(v) = lookup(ENV_CHANNEL_CAPACITY) {
            self.channel_capacity = v.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: ENV_CHANNEL_CAPACITY,
                value: v.clone(),
            })?;
        }
        if let Some(v) = lookup(ENV_DELETE_POLICY) {
            self.delete_policy = match v.trim().to_ascii_lowercase().as_str() {
                "cascade" => DeletePolicy::Cascade,
                "unassign" => DeletePolicy::Unassign,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: ENV_DELETE_POLICY,
                        value: v,
                    })
                }
            };
        }
        self.validate()
    }

    fn validate(self) -> Result<Self, ConfigError> {
        // tokio's mpsc::channel panics on zero capacity
        if self.channel_capacity == 0 {
            return Err(ConfigError::InvalidValue {
                key: "channel_capacity",
                value: "0".to_string(),
            });
        }
        Ok(self)
    }
}
