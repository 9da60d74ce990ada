//! Error types for the OpenAI client.

use thiserror::Error;

/// Result type for OpenAI client operations.
pub type Result<T> = std::result::Result<T, OpenAIError>;

/// OpenAI client errors.
#[derive(Debug, Error)]
pub enum OpenAIError {
    /// Connection failed, timed out, or the body could not be read
    #[error("network error: {0}")]
    Network(String),

    /// Non-2xx response (auth failure, quota, invalid request)
    #[error("OpenAI API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Response body was not the expected JSON shape
    #[error("parse error: {0}")]
    Parse(String),

    /// Completion came back without any choice content
    #[error("no completion returned from OpenAI")]
    EmptyResponse,
}

impl OpenAIError {
    /// True for 401/403, which usually means a missing or revoked key.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, OpenAIError::Api { status: 401 | 403, .. })
    }
}
