use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError, FailurePolicy};

/// Turn a keyword into a generated HTML article.
#[derive(Debug, Parser)]
#[command(name = "walaoe", version, about)]
pub struct Args {
    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the generation service base URL
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Override the maximum keyword length (characters)
    #[arg(long, value_name = "N")]
    pub max_keyword_length: Option<usize>,

    /// What to show in place of the article when generation fails
    #[arg(long, value_enum, value_name = "POLICY")]
    pub failure_policy: Option<FailurePolicy>,

    /// Open this editor URL shortly after each successful copy
    #[arg(long, value_name = "URL")]
    pub editor_url: Option<String>,

    /// Write logs here instead of the default log file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// Load the config file, apply command-line overrides, then validate.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    fn apply_overrides(&self, config: &mut Config) {
        if let Some(endpoint) = &self.endpoint {
            config.generator.base_url = endpoint.clone();
        }
        if let Some(max) = self.max_keyword_length {
            config.keyword.max_length = max;
        }
        if let Some(policy) = self.failure_policy {
            config.article.failure_policy = policy;
        }
        if let Some(url) = &self.editor_url {
            config.editor.url = Some(url.clone());
            config.editor.redirect_after_copy = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("walaoe").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn overrides_replace_file_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[keyword]\nmax_length = 50\n").unwrap();

        let args = parse(&[
            "--config",
            path.to_str().unwrap(),
            "--max-keyword-length",
            "80",
            "--failure-policy",
            "keep-previous",
            "--endpoint",
            "http://127.0.0.1:9000",
        ]);
        let config = args.resolve_config().unwrap();

        assert_eq!(config.keyword.max_length, 80);
        assert_eq!(config.article.failure_policy, FailurePolicy::KeepPrevious);
        assert_eq!(config.generator.base_url, "http://127.0.0.1:9000");
    }

    #[test]
    fn file_values_survive_without_overrides() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[keyword]\nmax_length = 50\n").unwrap();

        let config = parse(&["--config", path.to_str().unwrap()])
            .resolve_config()
            .unwrap();
        assert_eq!(config.keyword.max_length, 50);
        assert_eq!(config.article.failure_policy, FailurePolicy::Placeholder);
    }

    #[test]
    fn editor_url_switches_redirect_on() {
        let dir = TempDir::new().unwrap();
        let args = parse(&[
            "--config",
            dir.path().join("missing.toml").to_str().unwrap(),
            "--editor-url",
            "https://wordhtml.com",
        ]);
        let config = args.resolve_config().unwrap();
        assert_eq!(config.editor.redirect_url(), Some("https://wordhtml.com"));
    }

    #[test]
    fn invalid_override_fails_validation() {
        let dir = TempDir::new().unwrap();
        let args = parse(&[
            "--config",
            dir.path().join("missing.toml").to_str().unwrap(),
            "--max-keyword-length",
            "0",
        ]);
        assert!(matches!(
            args.resolve_config(),
            Err(ConfigError::ValidationError { .. })
        ));
    }

    #[test]
    fn unknown_failure_policy_is_a_parse_error() {
        let result = Args::try_parse_from(["walaoe", "--failure-policy", "shrug"]);
        assert!(result.is_err());
    }
}
