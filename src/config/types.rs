use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::article::DEFAULT_MAX_KEYWORD_LENGTH;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub keyword: KeywordConfig,
    #[serde(default)]
    pub article: ArticleConfig,
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default)]
    pub preferences: PreferencesConfig,
}

/// Remote generation endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Base URL; requests go to `{base_url}/generate`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Total request timeout in seconds, enforced by the HTTP client.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordConfig {
    /// Maximum keyword length in characters.
    #[serde(default = "default_max_length")]
    pub max_length: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleConfig {
    #[serde(default)]
    pub failure_policy: FailurePolicy,
}

/// What happens to the displayed article when a generation request fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Replace the article with a short "an error occurred" fragment.
    #[default]
    Placeholder,
    /// Leave the last successful article on screen.
    KeepPrevious,
}

/// External editor the user can be sent to after copying.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    #[serde(default)]
    pub url: Option<String>,
    /// Open `url` shortly after every successful copy.
    #[serde(default)]
    pub redirect_after_copy: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreferencesConfig {
    /// Override for the preference file location.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

fn default_base_url() -> String {
    "https://walaoe.onrender.com".to_string()
}

fn default_timeout() -> u32 {
    60
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_max_length() -> usize {
    DEFAULT_MAX_KEYWORD_LENGTH
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            max_length: default_max_length(),
        }
    }
}

impl EditorConfig {
    /// The URL to open after a copy, if redirecting is switched on.
    pub fn redirect_url(&self) -> Option<&str> {
        if self.redirect_after_copy {
            self.url.as_deref()
        } else {
            None
        }
    }
}
