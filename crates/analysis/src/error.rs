//! Error types for the analysis client.
//!
//! These never cross the component boundary: `GeminiClient::analyze`
//! translates every failure into the fixed fallback brief. They exist for
//! logging and for exercising the failure paths in tests.

use thiserror::Error;

/// Result type alias for analysis operations
pub type ApiResult<T> = Result<T, AnalysisError>;

/// Analysis client errors
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The response text did not contain parseable JSON
    #[error("Unparseable brief: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The AI service returned an error response
    #[error("AI service error ({status}): {message}")]
    ApiResponse {
        /// HTTP status code
        status: u16,
        /// Error message from the service
        message: String,
    },

    /// The service answered without any candidate content
    #[error("AI service returned no candidates")]
    EmptyResponse,
}

impl AnalysisError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an API response error
    pub fn api_response(status: u16, message: impl Into<String>) -> Self {
        Self::ApiResponse {
            status,
            message: message.into(),
        }
    }

    /// True when the failure is the model's output rather than the wire
    #[must_use]
    pub fn is_parse_failure(&self) -> bool {
        matches!(self, Self::Json(_))
    }
}
