//! Configuration for the routing client.
//!
//! Supports environment-based configuration with sensible defaults.

use crate::error::{RouteError, RouteResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Public OSRM demo server
pub const DEFAULT_OSRM_URL: &str = "https://router.project-osrm.org";

/// Routing client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Base URL of the OSRM-compatible routing service
    pub base_url: String,
    /// Request timeout
    #[serde(with = "duration_secs")]
    pub timeout: Duration,
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_OSRM_URL.to_string(),
            timeout: Duration::from_secs(15),
        }
    }
}

impl RoutingConfig {
    /// Create configuration from environment variables
    ///
    /// Reads the following environment variables:
    /// - `SEHAT_OSRM_URL`: Base URL of the routing service
    /// - `SEHAT_OSRM_TIMEOUT_SECS`: Request timeout in seconds
    pub fn from_env() -> RouteResult<Self> {
        let base_url = env::var("SEHAT_OSRM_URL").unwrap_or_else(|_| DEFAULT_OSRM_URL.to_string());

        let timeout = env::var("SEHAT_OSRM_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(15));

        Ok(Self { base_url, timeout })
    }

    /// Builder-style method to set the base URL
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Builder-style method to set the timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> RouteResult<()> {
        if self.base_url.is_empty() {
            return Err(RouteError::config("base_url cannot be empty"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(RouteError::config(
                "base_url must start with http:// or https://",
            ));
        }

        if self.timeout.is_zero() {
            return Err(RouteError::config("timeout cannot be zero"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RoutingConfig::default();
        assert_eq!(config.base_url, DEFAULT_OSRM_URL);
        assert_eq!(config.timeout, Duration::from_secs(15));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = RoutingConfig::default()
            .with_base_url("http://localhost:5000")
            .with_timeout(Duration::from_secs(2));

        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.timeout, Duration::from_secs(2));
    }

    #[test]
    fn test_validation_rejects_bad_urls() {
        assert!(RoutingConfig::default().with_base_url("").validate().is_err());
        assert!(RoutingConfig::default()
            .with_base_url("ftp://example.com")
            .validate()
            .is_err());
    }

    #[test]
    fn test_validation_rejects_zero_timeout() {
        let config = RoutingConfig::default().with_timeout(Duration::ZERO);
        assert!(config.validate().is_err());
    }
}
