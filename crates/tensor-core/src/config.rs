//! Configuration structures for Tensor clients.
//!
//! [`TensorClientConfig`] is the user-facing, serde-friendly configuration.
//! It is validated and frozen into a [`TransportConfig`] when a transport is
//! built; the transport owns that value for its whole lifetime.

use crate::Error;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;
use validator::Validate;

/// Production API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.mainnet.tensordev.io";

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-tensor-api-key";

/// Configuration for a Tensor client instance.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TensorClientConfig {
    /// API base URL (e.g., `https://api.mainnet.tensordev.io`)
    #[validate(url)]
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Optional API key, sent as `x-tensor-api-key`
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,

    /// Request timeout in seconds
    #[validate(range(min = 1, max = 300))]
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

const fn default_request_timeout_secs() -> u64 {
    30
}

impl TensorClientConfig {
    /// Create a new client configuration for `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or validation fails.
    pub fn new(base_url: impl Into<String>) -> Result<Self, Error> {
        let config = Self {
            base_url: base_url.into(),
            ..Self::default()
        };

        config
            .validate()
            .map_err(|e| Error::ConfigError(format!("Invalid configuration: {e}")))?;

        Ok(config)
    }

    /// Set the API key.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set request timeout in seconds.
    #[must_use]
    pub const fn with_timeout(mut self, seconds: u64) -> Self {
        self.request_timeout_secs = seconds;
        self
    }

    /// Get the request timeout as a Duration.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Validate and freeze into a [`TransportConfig`].
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails or the base URL cannot be parsed.
    pub fn into_transport_config(self) -> Result<TransportConfig, Error> {
        self.validate()
            .map_err(|e| Error::ConfigError(format!("Invalid configuration: {e}")))?;
        TransportConfig::new(&self.base_url, self.timeout(), self.api_key)
    }
}

impl Default for TensorClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

/// Immutable settings owned by a transport.
#[derive(Debug)]
pub struct TransportConfig {
    base_url: String,
    timeout: Duration,
    api_key: Option<SecretString>,
}

impl TransportConfig {
    /// Build a transport configuration.
    ///
    /// A trailing `/` on `base_url` is dropped. An empty API key is treated
    /// as no key at all.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an absolute URL or `timeout` is zero.
    pub fn new(base_url: &str, timeout: Duration, api_key: Option<String>) -> Result<Self, Error> {
        Url::parse(base_url)?;
        if timeout.is_zero() {
            return Err(Error::ConfigError("timeout must be greater than 0".to_string()));
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
            api_key: api_key
                .filter(|key| !key.is_empty())
                .map(SecretString::from),
        })
    }

    /// Base URL without a trailing `/`.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Timeout applied to every exchange.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// The API key, if one was configured.
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_ref().map(|key| key.expose_secret())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tensor_client_config_new() {
        let config = TensorClientConfig::new("https://api.devnet.tensordev.io").unwrap();
        assert_eq!(config.base_url, "https://api.devnet.tensordev.io");
        assert_eq!(config.request_timeout_secs, 30);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_tensor_client_config_invalid_url() {
        let result = TensorClientConfig::new("not a url");
        assert!(matches!(result, Err(Error::ConfigError(_))));
    }

    #[test]
    fn test_tensor_client_config_builder() {
        let config = TensorClientConfig::default()
            .with_api_key("secret")
            .with_timeout(10);
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_tensor_client_config_default() {
        let config = TensorClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_config_validation_timeout_range() {
        let config = TensorClientConfig::default().with_timeout(0);
        assert!(config.validate().is_err());
        assert!(config.into_transport_config().is_err());

        let config = TensorClientConfig::default().with_timeout(301);
        assert!(config.validate().is_err());

        let config = TensorClientConfig::default().with_timeout(300);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_api_key_not_serialized() {
        let config = TensorClientConfig::default().with_api_key("secret");
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("secret"));
    }

    #[test]
    fn test_config_deserialization_defaults() {
        let config: TensorClientConfig = serde_json::from_str(r#"{"api_key":"k"}"#).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.api_key.as_deref(), Some("k"));
    }

    #[test]
    fn test_transport_config_trims_trailing_slash() {
        let config =
            TransportConfig::new("https://api.example.com/", Duration::from_secs(5), None).unwrap();
        assert_eq!(config.base_url(), "https://api.example.com");
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_transport_config_empty_key_is_absent() {
        let config = TransportConfig::new(
            "https://api.example.com",
            Duration::from_secs(5),
            Some(String::new()),
        )
        .unwrap();
        assert!(config.api_key().is_none());

        let config = TensorClientConfig::default()
            .with_api_key("abc")
            .into_transport_config()
            .unwrap();
        assert_eq!(config.api_key(), Some("abc"));
    }

    #[test]
    fn test_transport_config_debug_hides_key() {
        let config = TransportConfig::new(
            "https://api.example.com",
            Duration::from_secs(5),
            Some("super-secret".to_string()),
        )
        .unwrap();
        assert!(!format!("{config:?}").contains("super-secret"));
    }

    #[test]
    fn test_transport_config_rejects_zero_timeout() {
        let result = TransportConfig::new("https://api.example.com", Duration::ZERO, None);
        assert!(matches!(result, Err(Error::ConfigError(_))));
    }
}
