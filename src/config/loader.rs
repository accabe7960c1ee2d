use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// `~/.config/walaoe/config.toml` on Linux, the platform equivalent
    /// elsewhere. Falls back to the current directory.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("walaoe").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// A missing file yields `Config::default()`. The result is not validated
    /// here so that CLI overrides can be applied first.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - `keyword.max_length` is at least 1
    /// - `generator.base_url` is an http(s) URL
    /// - both generator timeouts are non-zero
    /// - a redirect after copy has a URL to go to
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.keyword.max_length == 0 {
            return Err(invalid("keyword.max_length must be at least 1"));
        }

        let base_url = self.generator.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(invalid(format!(
                "generator.base_url '{}' must start with http:// or https://",
                self.generator.base_url
            )));
        }

        if self.generator.timeout_seconds == 0 || self.generator.connect_timeout_seconds == 0 {
            return Err(invalid("generator timeouts must be greater than zero"));
        }

        if self.editor.redirect_after_copy && self.editor.url.is_none() {
            return Err(invalid("editor.redirect_after_copy requires editor.url"));
        }

        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> ConfigError {
    ConfigError::ValidationError {
        message: message.into(),
    }
}
