//! Configuration loading and validation for WattWise.
//!
//! Loads configuration from `~/.wattwise/config.toml` with environment
//! variable overrides. A missing file yields pure defaults; a malformed
//! file is an error.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The root configuration structure.
///
/// Maps directly to `~/.wattwise/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the chat/augmentation endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Model identifier sent with every chat request.
    #[serde(default = "default_model")]
    pub model: String,

    /// Path to the two-column credential file (`username,tier` per line).
    #[serde(default = "default_users_file")]
    pub users_file: String,

    /// HTTP request timeout in seconds. The original system relied on
    /// platform defaults; this is a defensive bound, not a contract.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_endpoint() -> String {
    "http://localhost:11434".into()
}
fn default_model() -> String {
    "mistral".into()
}
fn default_users_file() -> String {
    "users.csv".into()
}
fn default_request_timeout_secs() -> u64 {
    120
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            users_file: default_users_file(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the default path (~/.wattwise/config.toml).
    ///
    /// Environment variables take priority over the file:
    /// - `WATTWISE_ENDPOINT` — chat endpoint base URL
    /// - `WATTWISE_MODEL` — model identifier
    /// - `WATTWISE_USERS_FILE` — credential file path
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_dir().join("config.toml");
        let mut config = Self::load_from(&config_path)?;

        if let Ok(endpoint) = std::env::var("WATTWISE_ENDPOINT") {
            config.endpoint = endpoint;
        }
        if let Ok(model) = std::env::var("WATTWISE_MODEL") {
            config.model = model;
        }
        if let Ok(users_file) = std::env::var("WATTWISE_USERS_FILE") {
            config.users_file = users_file;
        }

        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        if let Ok(dir) = std::env::var("WATTWISE_CONFIG_DIR") {
            return PathBuf::from(dir);
        }
        dirs_home().join(".wattwise")
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoint.trim().is_empty() {
            return Err(ConfigError::ValidationError("endpoint must not be empty".into()));
        }
        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err(ConfigError::ValidationError(
                "endpoint must start with http:// or https://".into(),
            ));
        }
        if self.model.trim().is_empty() {
            return Err(ConfigError::ValidationError("model must not be empty".into()));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "request_timeout_secs must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    /// The endpoint base URL without a trailing slash.
    pub fn endpoint_base(&self) -> &str {
        self.endpoint.trim_end_matches('/')
    }

    /// Generate a default config TOML string.
    pub fn default_toml() -> String {
        toml::to_string_pretty(&Self::default()).unwrap_or_default()
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}
