//! Upstream REST API configuration types

use url::Url;

use crate::{get_env_or_default, parse_env, ConfigError, ConfigResult};

/// Default upstream: the public JSONPlaceholder instance
pub const DEFAULT_PLACEHOLDER_URL: &str = "https://jsonplaceholder.typicode.com";

/// Configuration for the upstream JSONPlaceholder-style resource API
#[derive(Debug, Clone)]
pub struct PlaceholderConfig {
    /// Base URL of the resource API
    pub url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
}

impl PlaceholderConfig {
    /// Load upstream configuration from environment variables
    pub fn from_env() -> ConfigResult<Self> {
        let url = get_env_or_default("PLACEHOLDER_API_URL", DEFAULT_PLACEHOLDER_URL);
        Self::validate_url(&url)?;

        Ok(Self {
            url,
            timeout_secs: parse_env("PLACEHOLDER_TIMEOUT", 10)?,
            connect_timeout_secs: parse_env("PLACEHOLDER_CONNECT_TIMEOUT", 5)?,
        })
    }

    /// Create a configuration with a custom URL (useful for testing)
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    fn validate_url(url: &str) -> ConfigResult<()> {
        let invalid = |reason: String| {
            ConfigError::InvalidUrl("PLACEHOLDER_API_URL".to_string(), reason)
        };

        let parsed = Url::parse(url.trim()).map_err(|e| invalid(format!("'{}': {}", url, e)))?;
        match parsed.scheme() {
            "http" | "https" if parsed.host_str().is_some() => Ok(()),
            "http" | "https" => Err(invalid(format!("'{}' has no host", url))),
            scheme => Err(invalid(format!(
                "expected an http(s) URL, got scheme '{}'",
                scheme
            ))),
        }
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    /// Get the full URL for a resource path such as `/posts/1`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url(), path.trim_start_matches('/'))
    }
}

impl Default for PlaceholderConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_PLACEHOLDER_URL.to_string(),
            timeout_secs: 10,
            connect_timeout_secs: 5,
        }
    }
}
