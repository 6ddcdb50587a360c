//! Common test utilities for API integration tests
//!
//! Builds a schema wired to a mock upstream and offers helpers for
//! executing documents and reading field errors.

#![allow(dead_code)]

use async_graphql::{Request, Response, ServerError, Variables};
use graphqlzero_api::{build_schema, DebugLog, GraphQLZeroSchema, LimitPolicy};
use graphqlzero_placeholder_client::ResourceClient;
use graphqlzero_shared_config::PlaceholderConfig;
use graphqlzero_test_utils::MockPlaceholderServer;

/// A schema talking to its own mock upstream
pub struct TestContext {
    pub upstream: MockPlaceholderServer,
    pub schema: GraphQLZeroSchema,
}

impl TestContext {
    /// Start a mock upstream and build a schema with the default limit policy
    pub async fn start() -> Self {
        Self::start_with_policy(LimitPolicy::default()).await
    }

    pub async fn start_with_policy(policy: LimitPolicy) -> Self {
        let upstream = MockPlaceholderServer::start().await;
        let client = ResourceClient::new(&PlaceholderConfig::with_url(upstream.url()))
            .expect("client builds");
        let schema = build_schema(client, policy, DebugLog::new(true)).expect("schema builds");
        Self { upstream, schema }
    }

    /// Execute a document without variables
    pub async fn execute(&self, query: &str) -> Response {
        self.schema.execute(query).await
    }

    /// Execute a document with JSON variables
    pub async fn execute_with(&self, query: &str, variables: serde_json::Value) -> Response {
        let request = Request::new(query).variables(Variables::from_json(variables));
        self.schema.execute(request).await
    }
}

/// Response data as JSON
pub fn data(response: &Response) -> serde_json::Value {
    response
        .data
        .clone()
        .into_json()
        .expect("data converts to JSON")
}

/// The `code` extension of a field error
pub fn error_code(error: &ServerError) -> Option<String> {
    let extensions = error.extensions.as_ref()?;
    match extensions.get("code")? {
        async_graphql::Value::String(code) => Some(code.clone()),
        _ => None,
    }
}
