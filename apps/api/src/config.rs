//! API server configuration

use std::env;

use anyhow::{bail, Context, Result};
use graphqlzero_shared_config::{CommonConfig, Environment, PlaceholderConfig};

use crate::graphql::pagination::{DEFAULT_MAX_LIMIT, MIN_LIMIT};

/// API server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Common configuration shared with other crates
    pub common: CommonConfig,

    /// Server port (default: 4000)
    pub port: u16,

    /// Emit a log line for every resolver invocation (`DEBUG=true`)
    pub debug: bool,

    /// Largest page size list fields may request (default: 100)
    pub max_page_limit: i32,

    /// CORS allowed origins (optional)
    pub cors_allowed_origins: Option<Vec<String>>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let common = CommonConfig::from_env()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

        Ok(Self {
            common,

            port: env::var("PORT")
                .unwrap_or_else(|_| "4000".to_string())
                .parse()
                .context("Invalid PORT value")?,

            debug: Self::load_debug_flag(),

            max_page_limit: Self::load_max_page_limit()?,

            cors_allowed_origins: env::var("CORS_ORIGINS").ok().map(|s| {
                s.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            }),
        })
    }

    /// Read the resolver debug flag; only the literal `true` enables it
    fn load_debug_flag() -> bool {
        env::var("DEBUG")
            .map(|value| value == "true")
            .unwrap_or(false)
    }

    /// Load and validate MAX_PAGE_LIMIT
    fn load_max_page_limit() -> Result<i32> {
        let Ok(raw) = env::var("MAX_PAGE_LIMIT") else {
            return Ok(DEFAULT_MAX_LIMIT);
        };

        let limit: i32 = raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid MAX_PAGE_LIMIT value '{}'", raw))?;

        if limit < MIN_LIMIT {
            bail!(
                "MAX_PAGE_LIMIT must be at least {} (got {})",
                MIN_LIMIT,
                limit
            );
        }
        Ok(limit)
    }

    /// Get upstream API configuration
    pub fn placeholder(&self) -> &PlaceholderConfig {
        &self.common.placeholder
    }

    /// Get environment mode
    pub fn environment(&self) -> Environment {
        self.common.environment
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.common.environment.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        temp_env::with_vars_unset(
            [
                "PORT",
                "DEBUG",
                "MAX_PAGE_LIMIT",
                "CORS_ORIGINS",
                "ENVIRONMENT",
                "PLACEHOLDER_API_URL",
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.port, 4000);
                assert!(!config.debug);
                assert_eq!(config.max_page_limit, DEFAULT_MAX_LIMIT);
                assert!(config.cors_allowed_origins.is_none());
                assert_eq!(config.environment(), Environment::Development);
                assert_eq!(
                    config.placeholder().url,
                    "https://jsonplaceholder.typicode.com"
                );
            },
        );
    }

    #[test]
    fn test_debug_flag() {
        temp_env::with_var("DEBUG", Some("true"), || {
            assert!(Config::load_debug_flag());
        });
        temp_env::with_var("DEBUG", Some("TRUE"), || {
            assert!(!Config::load_debug_flag());
        });
        temp_env::with_var("DEBUG", Some(" true"), || {
            assert!(!Config::load_debug_flag());
        });
        temp_env::with_var("DEBUG", Some("1"), || {
            assert!(!Config::load_debug_flag());
        });
        temp_env::with_var_unset("DEBUG", || {
            assert!(!Config::load_debug_flag());
        });
    }

    #[test]
    fn test_max_page_limit_override() {
        temp_env::with_var("MAX_PAGE_LIMIT", Some("200"), || {
            assert_eq!(Config::load_max_page_limit().unwrap(), 200);
        });
    }

    #[test]
    fn test_max_page_limit_must_be_positive() {
        temp_env::with_var("MAX_PAGE_LIMIT", Some("0"), || {
            let err = Config::load_max_page_limit().unwrap_err().to_string();
            assert!(err.contains("at least 1"));
        });
    }

    #[test]
    fn test_max_page_limit_must_be_numeric() {
        temp_env::with_var("MAX_PAGE_LIMIT", Some("lots"), || {
            let err = Config::load_max_page_limit().unwrap_err().to_string();
            assert!(err.contains("MAX_PAGE_LIMIT"));
        });
    }

    #[test]
    fn test_invalid_port() {
        temp_env::with_var("PORT", Some("http"), || {
            let err = Config::from_env().unwrap_err().to_string();
            assert!(err.contains("PORT"));
        });
    }

    #[test]
    fn test_cors_origins_parsing() {
        temp_env::with_var(
            "CORS_ORIGINS",
            Some("https://a.example, ,https://b.example"),
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(
                    config.cors_allowed_origins,
                    Some(vec![
                        "https://a.example".to_string(),
                        "https://b.example".to_string()
                    ])
                );
            },
        );
    }
}
