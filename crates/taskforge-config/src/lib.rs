//! Configuration system for TaskForge.
//!
//! Load engine configuration from TOML or YAML files to control runtime
//! assertions and the planning user without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use taskforge_config::{EngineConfig, EnvironmentMode};
//!
//! let config = EngineConfig::from_toml_str(r#"
//!     environment_mode = "full_assert"
//!
//!     [planning_user]
//!     id = -100
//!     name = "unassigned"
//! "#).unwrap();
//!
//! assert_eq!(config.environment_mode, EnvironmentMode::FullAssert);
//! assert_eq!(config.planning_user().name, "unassigned");
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use taskforge_config::EngineConfig;
//!
//! let config = EngineConfig::load("taskforge.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use taskforge_core::{User, UserId};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct EngineConfig {
    /// Environment mode controlling runtime consistency checks.
    #[serde(default)]
    pub environment_mode: EnvironmentMode,

    /// The sentinel user standing for "not yet assigned".
    #[serde(default)]
    pub planning_user: PlanningUserConfig,
}

impl EngineConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()
    }

    /// Sets the environment mode.
    pub fn with_environment_mode(mut self, mode: EnvironmentMode) -> Self {
        self.environment_mode = mode;
        self
    }

    /// Sets the planning user id and name.
    pub fn with_planning_user(mut self, id: i64, name: impl Into<String>) -> Self {
        self.planning_user = PlanningUserConfig {
            id,
            name: name.into(),
        };
        self
    }

    /// Builds the planning user described by this configuration.
    pub fn planning_user(&self) -> User {
        User::new(UserId(self.planning_user.id), self.planning_user.name.clone())
    }

    /// Returns true if `id` is the configured planning user.
    pub fn is_planning_user(&self, id: UserId) -> bool {
        self.planning_user.id == id.0
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.planning_user.name.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "planning_user.name must not be empty".to_string(),
            ));
        }
        Ok(self)
    }
}

/// Environment mode affecting runtime checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentMode {
    /// No checks beyond what each change does itself.
    #[default]
    Production,

    /// Validate the working solution invariants after every change.
    FastAssert,

    /// Validate before and after every change and verify its notification trace.
    FullAssert,
}

impl EnvironmentMode {
    /// Returns true if solution invariants are checked after each change.
    pub fn is_asserted(&self) -> bool {
        !matches!(self, EnvironmentMode::Production)
    }

    /// Returns true if notification traces are verified.
    pub fn is_fully_asserted(&self) -> bool {
        matches!(self, EnvironmentMode::FullAssert)
    }
}

/// Planning user configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PlanningUserConfig {
    /// User id of the planning user; must not collide with real users.
    #[serde(default = "default_planning_user_id")]
    pub id: i64,

    /// Display name of the planning user.
    #[serde(default = "default_planning_user_name")]
    pub name: String,
}

impl Default for PlanningUserConfig {
    fn default() -> Self {
        Self {
            id: default_planning_user_id(),
            name: default_planning_user_name(),
        }
    }
}

fn default_planning_user_id() -> i64 {
    User::PLANNING_USER_ID.0
}

fn default_planning_user_name() -> String {
    User::PLANNING_USER_NAME.to_string()
}

#[cfg(test)]
mod tests;
