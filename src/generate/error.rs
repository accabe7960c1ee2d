use thiserror::Error;

/// Failures at the generation boundary.
///
/// The orchestrator collapses every variant into one user-facing message;
/// the detail only reaches the log.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Connection, TLS, timeout or body read failure.
    #[error("Request to generation service failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response.
    #[error("Generation service returned {status}: {body}")]
    Status { status: u16, body: String },

    /// 2xx response whose body is not `{ "text": string }`.
    #[error("Unexpected response from generation service: {0}")]
    Decode(String),
}
