//! Configuration for the generation client.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{
    ArticleConfig, Config, EditorConfig, FailurePolicy, GeneratorConfig, KeywordConfig,
    PreferencesConfig,
};
