//! Pre-flight keyword checks. Nothing here touches the network.

use thiserror::Error;

/// Default `MAX_KEYWORD_LENGTH`; deployments override it through `[keyword]`.
pub const DEFAULT_MAX_KEYWORD_LENGTH: usize = 200;

/// Why a keyword was refused before any request was issued.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("❌ Keyword must not be empty!")]
    EmptyKeyword,

    #[error("❌ Keyword is too long! Maximum {max} characters.")]
    KeywordTooLong { max: usize, length: usize },
}

pub type ValidationResult<'a> = Result<&'a str, ValidationError>;

/// Validates raw keyword input against the configured maximum length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordValidator {
    max_length: usize,
}

impl Default for KeywordValidator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_KEYWORD_LENGTH)
    }
}

impl KeywordValidator {
    pub fn new(max_length: usize) -> Self {
        Self { max_length }
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Accept or reject a keyword.
    ///
    /// Emptiness is judged on the trimmed text, length on the raw text
    /// (counted in chars). An accepted keyword is returned untouched.
    pub fn validate<'a>(&self, keyword: &'a str) -> ValidationResult<'a> {
        if keyword.trim().is_empty() {
            return Err(ValidationError::EmptyKeyword);
        }

        let length = keyword.chars().count();
        if length > self.max_length {
            return Err(ValidationError::KeywordTooLong {
                max: self.max_length,
                length,
            });
        }

        Ok(keyword)
    }
}
