//! LLM error types

use thiserror::Error;

/// Errors that can occur during LLM operations
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API key not found: set the {0} environment variable")]
    MissingApiKey(String),

    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LlmError {
    /// Check if this is an authentication/credential error
    pub fn is_auth(&self) -> bool {
        match self {
            LlmError::MissingApiKey(_) => true,
            LlmError::ApiError { status, .. } => matches!(status, 401 | 403),
            _ => false,
        }
    }
}
