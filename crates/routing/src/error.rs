//! Error types for the routing client.
//!
//! Errors exist for logging and tests; `OsrmClient::route` translates every
//! one of them into the straight-line fallback, so no error crosses the
//! component boundary.

use thiserror::Error;

/// Result type alias for routing operations
pub type RouteResult<T> = Result<T, RouteError>;

/// Routing client errors
#[derive(Error, Debug)]
pub enum RouteError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Routing service returned an error response
    #[error("Routing service error ({status}): {message}")]
    ApiResponse {
        /// HTTP status code
        status: u16,
        /// Error message from the service
        message: String,
    },

    /// The service answered but found no drivable route
    #[error("No drivable route between the given coordinates")]
    NoRoute,
}

impl RouteError {
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

    /// True when the service was reachable but had no route to offer
    #[must_use]
    pub fn is_no_route(&self) -> bool {
        matches!(self, Self::NoRoute)
    }

    /// True when the failure happened on the wire rather than in the service
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Request(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        assert!(RouteError::NoRoute.is_no_route());
        assert!(!RouteError::NoRoute.is_transport());
        assert!(!RouteError::api_response(502, "bad gateway").is_no_route());
    }
}
