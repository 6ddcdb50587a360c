//! Mock JSONPlaceholder server for testing the resource client and resolvers
//!
//! Provides a [`MockPlaceholderServer`] that answers like json-server:
//! bare JSON arrays for collections with `X-Total-Count` and `Link` headers,
//! bare objects for single records.

use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mock upstream REST API
///
/// This struct wraps a [`wiremock::MockServer`] and provides convenience methods
/// for setting up common json-server responses. Mocks mounted with an expected
/// call count are verified when the server is dropped.
///
/// # Example
///
/// ```rust,ignore
/// use graphqlzero_test_utils::{fixtures, MockPlaceholderServer};
///
/// #[tokio::test]
/// async fn test_posts() {
///     let server = MockPlaceholderServer::start().await;
///     server.mock_page("/posts", vec![fixtures::post(1, 1)]).await;
///
///     // Configure your client with server.url()
/// }
/// ```
pub struct MockPlaceholderServer {
    server: MockServer,
}

impl MockPlaceholderServer {
    /// Start a new mock server
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Get the server URL
    pub fn url(&self) -> String {
        self.server.uri()
    }

    /// Get reference to the underlying mock server for custom mock setups
    pub fn inner(&self) -> &MockServer {
        &self.server
    }

    fn page_response(records: Vec<Value>, total_count: usize) -> ResponseTemplate {
        ResponseTemplate::new(200)
            .insert_header("X-Total-Count", total_count.to_string().as_str())
            .set_body_json(Value::Array(records))
    }

    /// Mount a collection; the total count is the number of records
    pub async fn mock_page(&self, resource_path: &str, records: Vec<Value>) {
        let total = records.len();
        Mock::given(method("GET"))
            .and(path(resource_path))
            .respond_with(Self::page_response(records, total))
            .mount(&self.server)
            .await;
    }

    /// Mount a collection that only answers when `_limit` has the given value
    ///
    /// The mock expects exactly one matching request.
    pub async fn mock_page_with_limit(&self, resource_path: &str, limit: i32, records: Vec<Value>) {
        let total = records.len();
        Mock::given(method("GET"))
            .and(path(resource_path))
            .and(query_param("_limit", limit.to_string().as_str()))
            .respond_with(Self::page_response(records, total))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Mount a collection with pagination headers
    ///
    /// `link` is sent verbatim as the `Link` header.
    pub async fn mock_page_with_links(
        &self,
        resource_path: &str,
        records: Vec<Value>,
        total_count: usize,
        link: &str,
    ) {
        Mock::given(method("GET"))
            .and(path(resource_path))
            .respond_with(Self::page_response(records, total_count).insert_header("Link", link))
            .mount(&self.server)
            .await;
    }

    /// Mount a single record
    pub async fn mock_resource(&self, resource_path: &str, record: Value) {
        Mock::given(method("GET"))
            .and(path(resource_path))
            .respond_with(ResponseTemplate::new(200).set_body_json(record))
            .mount(&self.server)
            .await;
    }

    /// Mount a single record that must be fetched exactly `times` times
    pub async fn mock_resource_expect(&self, resource_path: &str, record: Value, times: u64) {
        Mock::given(method("GET"))
            .and(path(resource_path))
            .respond_with(ResponseTemplate::new(200).set_body_json(record))
            .expect(times)
            .mount(&self.server)
            .await;
    }

    /// Mount a POST to a collection answering 201 with `created`
    pub async fn mock_create(&self, resource_path: &str, created: Value) {
        Mock::given(method("POST"))
            .and(path(resource_path))
            .respond_with(ResponseTemplate::new(201).set_body_json(created))
            .mount(&self.server)
            .await;
    }

    /// Mount a PATCH to a record answering with `updated`
    pub async fn mock_update(&self, resource_path: &str, updated: Value) {
        Mock::given(method("PATCH"))
            .and(path(resource_path))
            .respond_with(ResponseTemplate::new(200).set_body_json(updated))
            .mount(&self.server)
            .await;
    }

    /// Mount a DELETE answering with an empty object
    pub async fn mock_delete(&self, resource_path: &str) {
        Mock::given(method("DELETE"))
            .and(path(resource_path))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&self.server)
            .await;
    }

    /// Mount a 404 for any method on a path
    pub async fn mock_not_found(&self, resource_path: &str) {
        Mock::given(path(resource_path))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({})))
            .mount(&self.server)
            .await;
    }

    /// Mount an error status for any method on a path
    pub async fn mock_server_error(&self, resource_path: &str, status_code: u16) {
        Mock::given(path(resource_path))
            .respond_with(ResponseTemplate::new(status_code).set_body_string("upstream exploded"))
            .mount(&self.server)
            .await;
    }

    /// Mount the base URL answering 200, as the readiness probe expects
    pub async fn mock_health(&self) {
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .mount(&self.server)
            .await;
    }

    /// Number of requests the server has received so far
    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or(0)
    }
}
