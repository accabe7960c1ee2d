use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::config::GeneratorConfig;

use super::error::GenerateError;

/// Turns a keyword into an HTML article.
#[async_trait]
pub trait ArticleGenerator: Send + Sync {
    /// Returns the article HTML exactly as the service produced it.
    async fn generate(&self, keyword: &str) -> Result<String, GenerateError>;
}

/// Request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub keyword: String,
}

/// Response body. `text` is an HTML fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub text: String,
}

/// [`ArticleGenerator`] backed by the remote HTTP service.
pub struct HttpGenerator {
    client: Client,
    url: String,
}

impl HttpGenerator {
    pub fn new(config: &GeneratorConfig) -> Result<Self, GenerateError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .build()
            .map_err(GenerateError::Client)?;

        Ok(Self {
            client,
            url: format!("{}/generate", config.base_url.trim().trim_end_matches('/')),
        })
    }

    /// Full endpoint URL.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ArticleGenerator for HttpGenerator {
    async fn generate(&self, keyword: &str) -> Result<String, GenerateError> {
        let body = GenerateRequest {
            keyword: keyword.to_string(),
        };

        tracing::debug!(url = %self.url, keyword_chars = keyword.chars().count(), "Sending generation request");

        let start = Instant::now();
        let response = self.client.post(&self.url).json(&body).send().await?;
        let status = response.status();
        let latency_ms = start.elapsed().as_millis() as u64;

        let text = response.text().await?;

        if !status.is_success() {
            return Err(GenerateError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let parsed: GenerateResponse = serde_json::from_str(&text)
            .map_err(|e| GenerateError::Decode(format!("Failed to parse response JSON: {}", e)))?;

        tracing::debug!(
            status = %status,
            latency_ms,
            html_bytes = parsed.text.len(),
            "Generation response received"
        );

        Ok(parsed.text)
    }
}
