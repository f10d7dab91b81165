//! Registry configuration (refract.toml)
//!
//! ```toml
//! default_policy = "as_box"
//! multiple_default_args = "reject"
//! log_rejected_invocations = true
//! ```

use std::path::Path;

use refract_sdk::Policy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Failed to serialize TOML
    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

/// What registration does when a constructor receives more than one
/// default-argument bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MultipleDefaultArgs {
    /// Use the first bundle and log a warning
    #[default]
    FirstMatch,
    /// Fail the registration
    Reject,
}

/// Registry configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
    /// Policy for constructors registered without an explicit one
    pub default_policy: Policy,

    /// Handling of multiple default-argument bundles
    pub multiple_default_args: MultipleDefaultArgs,

    /// Log a debug event when no constructor accepts a `create` call
    pub log_rejected_invocations: bool,
}

impl RegistryConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from a file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse a configuration from a string
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Render as TOML
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
