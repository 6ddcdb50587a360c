//! Resource client error types

use thiserror::Error;

/// Errors returned by [`ResourceClient`](crate::ResourceClient) operations
#[derive(Error, Debug)]
pub enum ClientError {
    /// The upstream API answered 404 for the requested path
    #[error("resource not found: {0}")]
    NotFound(String),

    /// The upstream API answered with a non-success status
    #[error("upstream API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Could not connect to the upstream API
    #[error("cannot connect to upstream API at {0}")]
    ConnectionRefused(String),

    /// Request exceeded the configured timeout
    #[error("upstream request timed out after {0} seconds")]
    Timeout(u64),

    /// Any other transport failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the JSON we expected
    #[error("failed to decode upstream response for {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for resource client operations
pub type ClientResult<T> = Result<T, ClientError>;
