//! Shared configuration types for GraphQLZero services
//!
//! This crate provides the configuration types used by the API server and
//! the upstream resource client, ensuring consistency across the workspace.

mod error;
mod placeholder;

pub use error::{ConfigError, ConfigResult};
pub use placeholder::{PlaceholderConfig, DEFAULT_PLACEHOLDER_URL};

use std::env;

/// Common configuration shared between all services
#[derive(Debug, Clone)]
pub struct CommonConfig {
    /// Upstream resource API configuration
    pub placeholder: PlaceholderConfig,

    /// Environment mode (development, staging, production)
    pub environment: Environment,

    /// Log filter (from RUST_LOG or LOG_LEVEL); `None` lets the binary pick its default
    pub log_level: Option<String>,
}

/// Application environment mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl std::str::FromStr for Environment {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "staging" | "stage" => Self::Staging,
            _ => Self::Development,
        })
    }
}

impl Environment {
    /// Check if this is a production environment
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if this is a development environment
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Staging => write!(f, "staging"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl CommonConfig {
    /// Load common configuration from environment variables
    pub fn from_env() -> ConfigResult<Self> {
        Ok(Self {
            placeholder: PlaceholderConfig::from_env()?,
            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string())
                .parse()
                .unwrap_or_default(),
            log_level: env::var("RUST_LOG").or_else(|_| env::var("LOG_LEVEL")).ok(),
        })
    }
}

/// Helper function to get an optional environment variable with a default
pub fn get_env_or_default(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Helper function to parse an environment variable into a specific type
pub fn parse_env<T>(name: &str, default: T) -> ConfigResult<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(val) => val
            .parse()
            .map_err(|e| ConfigError::InvalidValue(name.to_string(), format!("{}", e))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parsing() {
        assert_eq!(
            "production".parse::<Environment>().unwrap(),
            Environment::Production
        );
        assert_eq!(
            "prod".parse::<Environment>().unwrap(),
            Environment::Production
        );
        assert_eq!(
            "staging".parse::<Environment>().unwrap(),
            Environment::Staging
        );
        assert_eq!(
            "stage".parse::<Environment>().unwrap(),
            Environment::Staging
        );
        assert_eq!(
            "anything".parse::<Environment>().unwrap(),
            Environment::Development
        );
    }

    #[test]
    fn test_environment_display() {
        assert_eq!(format!("{}", Environment::Production), "production");
        assert_eq!(format!("{}", Environment::Staging), "staging");
        assert_eq!(format!("{}", Environment::Development), "development");
    }

    #[test]
    fn test_environment_checks() {
        assert!(Environment::Production.is_production());
        assert!(!Environment::Production.is_development());
        assert!(Environment::Development.is_development());
    }

    #[test]
    fn test_parse_env_default_when_unset() {
        temp_env::with_var_unset("GRAPHQLZERO_TEST_NUMBER", || {
            assert_eq!(parse_env("GRAPHQLZERO_TEST_NUMBER", 42u32).unwrap(), 42);
        });
    }

    #[test]
    fn test_parse_env_invalid_value() {
        temp_env::with_var("GRAPHQLZERO_TEST_NUMBER", Some("forty-two"), || {
            let err = parse_env("GRAPHQLZERO_TEST_NUMBER", 42u32).unwrap_err();
            assert!(err.to_string().contains("GRAPHQLZERO_TEST_NUMBER"));
        });
    }

    #[test]
    fn test_common_config_log_level_fallback() {
        temp_env::with_vars(
            [
                ("RUST_LOG", None),
                ("LOG_LEVEL", Some("warn")),
                ("ENVIRONMENT", Some("prod")),
                ("PLACEHOLDER_API_URL", None),
            ],
            || {
                let config = CommonConfig::from_env().unwrap();
                assert_eq!(config.log_level.as_deref(), Some("warn"));
                assert!(config.environment.is_production());
            },
        );
    }
}
