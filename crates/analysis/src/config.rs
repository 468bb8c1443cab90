//! Configuration for the analysis client.
//!
//! The API key is the only credential in the system and its absence is a
//! valid, handled configuration state: the client then short-circuits to the
//! fixed "not configured" brief instead of failing at startup.

use crate::error::{AnalysisError, ApiResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Default Gemini API endpoint
pub const DEFAULT_GEMINI_URL: &str = "https://generativelanguage.googleapis.com";

/// Default model for facility briefings
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Analysis client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Base URL of the generative-AI service
    pub base_url: String,
    /// Model identifier
    pub model: String,
    /// Opaque API credential; `None` is a valid degraded state
    pub api_key: Option<String>,
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

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_GEMINI_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(30),
        }
    }
}

impl AnalysisConfig {
    /// Create configuration from environment variables
    ///
    /// Reads the following environment variables:
    /// - `GEMINI_API_KEY`: API credential (optional; absence means the
    ///   fixed fallback brief is served)
    /// - `SEHAT_GEMINI_URL`: Base URL of the service
    /// - `SEHAT_GEMINI_MODEL`: Model identifier
    /// - `SEHAT_GEMINI_TIMEOUT_SECS`: Request timeout in seconds
    pub fn from_env() -> ApiResult<Self> {
        let base_url =
            env::var("SEHAT_GEMINI_URL").unwrap_or_else(|_| DEFAULT_GEMINI_URL.to_string());
        let model = env::var("SEHAT_GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let api_key = env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty());

        let timeout = env::var("SEHAT_GEMINI_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(30));

        Ok(Self {
            base_url,
            model,
            api_key,
            timeout,
        })
    }

    /// True when a credential is available.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Builder-style method to set the base URL
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Builder-style method to set the model
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Builder-style method to set the API key
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Builder-style method to set the timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> ApiResult<()> {
        if self.base_url.is_empty() {
            return Err(AnalysisError::config("base_url cannot be empty"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(AnalysisError::config(
                "base_url must start with http:// or https://",
            ));
        }

        if self.model.is_empty() {
            return Err(AnalysisError::config("model cannot be empty"));
        }

        if self.timeout.is_zero() {
            return Err(AnalysisError::config("timeout cannot be zero"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_unconfigured_but_valid() {
        let config = AnalysisConfig::default();
        assert!(!config.is_configured());
        assert!(config.validate().is_ok());
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_builder_pattern() {
        let config = AnalysisConfig::default()
            .with_api_key("test-key")
            .with_model("gemini-test")
            .with_timeout(Duration::from_secs(5));

        assert!(config.is_configured());
        assert_eq!(config.model, "gemini-test");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_validation() {
        assert!(AnalysisConfig::default()
            .with_base_url("")
            .validate()
            .is_err());
        assert!(AnalysisConfig::default()
            .with_model("")
            .validate()
            .is_err());
    }
}
