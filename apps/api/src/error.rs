//! Error handling for the GraphQLZero API
//!
//! This module provides a unified error type using thiserror, with HTTP
//! status code mapping for log severity and error-code extensions for
//! GraphQL field errors.

use async_graphql::ErrorExtensions;
use axum::http::StatusCode;
use graphqlzero_placeholder_client::ClientError;
use thiserror::Error;

/// Main API error type
#[derive(Error, Debug)]
pub enum ApiError {
    // ========== Validation Errors ==========
    /// Argument validation failed at the GraphQL boundary
    #[error("validation error: {0}")]
    ValidationError(String),

    // ========== Upstream Errors ==========
    /// Resource client failure, reported with the client's own message
    #[error(transparent)]
    Client(#[from] ClientError),

    // ========== Configuration Errors ==========
    /// Configuration error
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::ValidationError(_) => StatusCode::BAD_REQUEST,

            Self::Client(ClientError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Client(ClientError::Timeout(_)) => StatusCode::GATEWAY_TIMEOUT,
            Self::Client(_) => StatusCode::BAD_GATEWAY,

            Self::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code string for client-side handling
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::Client(ClientError::NotFound(_)) => "NOT_FOUND",
            Self::Client(ClientError::Timeout(_)) => "UPSTREAM_TIMEOUT",
            Self::Client(ClientError::ConnectionRefused(_)) => "UPSTREAM_UNREACHABLE",
            Self::Client(ClientError::Parse { .. }) => "UPSTREAM_DECODE_ERROR",
            Self::Client(_) => "UPSTREAM_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// Log the error with appropriate severity based on status code
    pub fn log(&self) {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(
                error = %self,
                code = self.error_code(),
                status = status.as_u16(),
                "Server error occurred"
            );
        } else {
            tracing::debug!(
                error = %self,
                code = self.error_code(),
                status = status.as_u16(),
                "Client error"
            );
        }
    }
}

impl ErrorExtensions for ApiError {
    fn extend(&self) -> async_graphql::Error {
        self.log();

        async_graphql::Error::new(self.to_string()).extend_with(|_, e| {
            e.set("code", self.error_code());
        })
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::validation("bad").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(ClientError::NotFound("/posts/1".into())).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(ClientError::Api {
                status: 500,
                message: "boom".into()
            })
            .status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ApiError::from(ClientError::Timeout(10)).status_code(),
            StatusCode::GATEWAY_TIMEOUT
        );
        assert_eq!(
            ApiError::Configuration("no client".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(ApiError::validation("x").error_code(), "VALIDATION_ERROR");
        assert_eq!(
            ApiError::from(ClientError::NotFound("/todos/9".into())).error_code(),
            "NOT_FOUND"
        );
        assert_eq!(
            ApiError::from(ClientError::ConnectionRefused("http://x".into())).error_code(),
            "UPSTREAM_UNREACHABLE"
        );
    }

    #[test]
    fn test_client_errors_are_reported_verbatim() {
        let client_err = ClientError::NotFound("/comments/42".into());
        let expected = client_err.to_string();
        assert_eq!(ApiError::from(client_err).to_string(), expected);
    }

    #[test]
    fn test_graphql_extension_carries_code() {
        let err = ApiError::validation("name must not be blank").extend();
        assert_eq!(err.message, "validation error: name must not be blank");
        let extensions = err.extensions.expect("extensions set");
        assert_eq!(
            extensions.get("code"),
            Some(&async_graphql::Value::from("VALIDATION_ERROR"))
        );
    }
}
