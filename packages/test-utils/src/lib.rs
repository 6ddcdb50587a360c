//! Shared test utilities for the GraphQLZero workspace
//!
//! This crate provides a mock of the upstream JSONPlaceholder API so the
//! client and API test suites run without network access.
//!
//! # Mock Services
//!
//! - [`MockPlaceholderServer`] - json-server style REST API
//! - [`fixtures`] - records shaped like the public JSONPlaceholder data
//!
//! # Example
//!
//! ```rust,ignore
//! use graphqlzero_test_utils::{fixtures, MockPlaceholderServer};
//!
//! #[tokio::test]
//! async fn test_with_mocks() {
//!     let upstream = MockPlaceholderServer::start().await;
//!     upstream.mock_resource("/posts/1", fixtures::post(1, 1)).await;
//!
//!     // Use upstream.url() to configure your client
//! }
//! ```

pub mod fixtures;
mod placeholder;

pub use placeholder::MockPlaceholderServer;
