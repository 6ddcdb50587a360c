//! Core resource client over a JSONPlaceholder-style REST API

use std::time::Duration;

use graphqlzero_shared_config::PlaceholderConfig;
use reqwest::header::HeaderMap;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::error::{ClientError, ClientResult};
use crate::options::PageQueryOptions;
use crate::page::{Page, PageMetadata, PaginationLinks};

/// Maximum error body size kept in [`ClientError::Api`]
const MAX_ERROR_BODY_SIZE: usize = 1000;

/// Header carrying the size of the whole collection
const TOTAL_COUNT_HEADER: &str = "x-total-count";

/// HTTP client for the upstream resource API
///
/// Issues exactly one request per call. No retries, no caching.
#[derive(Debug, Clone)]
pub struct ResourceClient {
    http_client: Client,
    config: PlaceholderConfig,
}

impl ResourceClient {
    /// Create a new client from configuration
    pub fn new(config: &PlaceholderConfig) -> ClientResult<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .user_agent(concat!("GraphQLZero/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http_client,
            config: config.clone(),
        })
    }

    /// Get the configuration
    pub fn config(&self) -> &PlaceholderConfig {
        &self.config
    }

    fn map_transport_error(&self, error: reqwest::Error) -> ClientError {
        if error.is_connect() {
            ClientError::ConnectionRefused(self.config.url.clone())
        } else if error.is_timeout() {
            ClientError::Timeout(self.config.timeout_secs)
        } else {
            ClientError::Http(error)
        }
    }

    /// Truncate error body to prevent memory exhaustion
    fn truncate_error_body(body: String) -> String {
        if body.len() <= MAX_ERROR_BODY_SIZE {
            return body;
        }

        let truncate_at = body
            .char_indices()
            .map(|(i, _)| i)
            .take_while(|i| *i <= MAX_ERROR_BODY_SIZE)
            .last()
            .unwrap_or(0);

        format!("{}... (truncated)", &body[..truncate_at])
    }

    /// Send a request and turn non-success statuses into errors
    async fn send(&self, request: RequestBuilder, path: &str) -> ClientResult<Response> {
        let response = request
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound(path.to_string()));
        }
        if !status.is_success() {
            let body = Self::truncate_error_body(response.text().await.unwrap_or_default());
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(response)
    }

    /// Read the body and decode it, treating an empty body as JSON `null`
    async fn decode<T: DeserializeOwned>(&self, response: Response, path: &str) -> ClientResult<T> {
        let text = response
            .text()
            .await
            .map_err(|e| self.map_transport_error(e))?;
        let body: &str = if text.trim().is_empty() { "null" } else { &text };

        serde_json::from_str(body).map_err(|source| ClientError::Parse {
            path: path.to_string(),
            source,
        })
    }

    fn page_metadata(headers: &HeaderMap) -> (Option<PaginationLinks>, PageMetadata) {
        let links = headers
            .get(reqwest::header::LINK)
            .and_then(|value| value.to_str().ok())
            .and_then(PaginationLinks::from_link_header);
        let total_count = headers
            .get(TOTAL_COUNT_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse().ok());

        (links, PageMetadata { total_count })
    }

    /// Fetch one page of a collection, e.g. `/posts` or `/users/1/todos`
    #[instrument(skip(self, options))]
    pub async fn fetch_page<T: DeserializeOwned>(
        &self,
        path: &str,
        options: Option<&PageQueryOptions>,
    ) -> ClientResult<Page<T>> {
        let query = options.map(PageQueryOptions::to_query_pairs).unwrap_or_default();
        debug!(?query, "Fetching page from upstream");

        let request = self.http_client.get(self.config.endpoint(path)).query(&query);
        let response = self.send(request, path).await?;
        let (links, meta) = Self::page_metadata(response.headers());
        let data: Vec<T> = self.decode(response, path).await?;

        debug!(count = data.len(), total = ?meta.total_count, "Fetched page");

        Ok(Page { data, links, meta })
    }

    /// Fetch a single resource, e.g. `/posts/1`
    #[instrument(skip(self))]
    pub async fn fetch_resource<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        debug!("Fetching resource from upstream");
        let request = self.http_client.get(self.config.endpoint(path));
        let response = self.send(request, path).await?;
        self.decode(response, path).await
    }

    /// Create a resource by POSTing `body` to a collection path
    #[instrument(skip(self, body))]
    pub async fn create_resource<T, B>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        debug!("Creating resource upstream");
        let request = self.http_client.post(self.config.endpoint(path)).json(body);
        let response = self.send(request, path).await?;
        self.decode(response, path).await
    }

    /// Apply a partial update by PATCHing `body` to a resource path
    #[instrument(skip(self, body))]
    pub async fn update_resource<T, B>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        debug!("Updating resource upstream");
        let request = self.http_client.patch(self.config.endpoint(path)).json(body);
        let response = self.send(request, path).await?;
        self.decode(response, path).await
    }

    /// Delete a resource and decode whatever the upstream answers with
    #[instrument(skip(self))]
    pub async fn delete_resource<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        debug!("Deleting resource upstream");
        let request = self.http_client.delete(self.config.endpoint(path));
        let response = self.send(request, path).await?;
        self.decode(response, path).await
    }

    /// Check whether the upstream API answers at its base URL
    pub async fn health_check(&self) -> ClientResult<bool> {
        match self.http_client.get(self.config.base_url()).send().await {
            Ok(response) => Ok(response.status().is_success()),
            Err(e) => Err(self.map_transport_error(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde::Deserialize;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::options::PaginateOptions;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Post {
        #[serde(deserialize_with = "crate::ids::deserialize")]
        id: String,
        title: Option<String>,
    }

    fn client_for(server: &MockServer) -> ResourceClient {
        ResourceClient::new(&PlaceholderConfig::with_url(server.uri())).unwrap()
    }

    #[test]
    fn test_client_creation() {
        let client = ResourceClient::new(&PlaceholderConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_truncate_error_body() {
        let short = "short error".to_string();
        assert_eq!(ResourceClient::truncate_error_body(short.clone()), short);

        let long = "x".repeat(2000);
        let truncated = ResourceClient::truncate_error_body(long);
        assert!(truncated.len() < 1100);
        assert!(truncated.ends_with("... (truncated)"));
    }

    #[test]
    fn test_truncate_error_body_utf8_boundary() {
        let utf8_str = "日".repeat(500);
        let truncated = ResourceClient::truncate_error_body(utf8_str);
        assert!(truncated.ends_with("... (truncated)"));
    }

    #[tokio::test]
    async fn test_fetch_page_sends_options_and_reads_headers() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/posts"))
            .and(query_param("_page", "2"))
            .and(query_param("_limit", "1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("X-Total-Count", "100")
                    .insert_header(
                        "Link",
                        r#"<http://h/posts?_page=1&_limit=1>; rel="first", <http://h/posts?_page=3&_limit=1>; rel="next""#,
                    )
                    .set_body_json(json!([{ "id": 2, "title": "qui est esse" }])),
            )
            .expect(1)
            .mount(&server)
            .await;

        let options = PageQueryOptions {
            paginate: Some(PaginateOptions {
                page: Some(2),
                limit: Some(1),
            }),
            ..Default::default()
        };

        let page: Page<Post> = client_for(&server)
            .fetch_page("/posts", Some(&options))
            .await
            .unwrap();

        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].id, "2");
        assert_eq!(page.meta.total_count, Some(100));
        let links = page.links.unwrap();
        assert_eq!(links.first.unwrap().page, Some(1));
        assert_eq!(links.next.unwrap().page, Some(3));
        assert!(links.last.is_none());
    }

    #[tokio::test]
    async fn test_fetch_page_without_headers() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/todos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let page: Page<Post> = client_for(&server).fetch_page("/todos", None).await.unwrap();
        assert!(page.data.is_empty());
        assert!(page.links.is_none());
        assert_eq!(page.meta.total_count, None);
    }

    #[tokio::test]
    async fn test_fetch_resource_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/posts/999"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({})))
            .mount(&server)
            .await;

        let result: ClientResult<Post> = client_for(&server).fetch_resource("/posts/999").await;
        assert_matches!(result, Err(ClientError::NotFound(path)) if path == "/posts/999");
    }

    #[tokio::test]
    async fn test_server_error_is_api_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/posts/1"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let result: ClientResult<Post> = client_for(&server).fetch_resource("/posts/1").await;
        assert_matches!(result, Err(ClientError::Api { status: 500, message }) if message == "boom");
    }

    #[tokio::test]
    async fn test_undecodable_body_is_parse_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/posts/1"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let result: ClientResult<Post> = client_for(&server).fetch_resource("/posts/1").await;
        assert_matches!(result, Err(ClientError::Parse { .. }));
    }

    #[tokio::test]
    async fn test_create_posts_json_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/posts"))
            .and(body_json(json!({ "title": "hello" })))
            .respond_with(
                ResponseTemplate::new(201).set_body_json(json!({ "id": 101, "title": "hello" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let created: Post = client_for(&server)
            .create_resource("/posts", &json!({ "title": "hello" }))
            .await
            .unwrap();
        assert_eq!(created.id, "101");
    }

    #[tokio::test]
    async fn test_update_uses_patch() {
        let server = MockServer::start().await;

        Mock::given(method("PATCH"))
            .and(path("/posts/1"))
            .and(body_json(json!({ "title": "renamed" })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "id": 1, "title": "renamed" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let updated: Post = client_for(&server)
            .update_resource("/posts/1", &json!({ "title": "renamed" }))
            .await
            .unwrap();
        assert_eq!(updated.title.as_deref(), Some("renamed"));
    }

    #[tokio::test]
    async fn test_delete_accepts_empty_body() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/posts/1"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let body: serde_json::Value = client_for(&server).delete_resource("/posts/1").await.unwrap();
        assert!(body.is_null());
    }

    #[tokio::test]
    async fn test_health_check() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .mount(&server)
            .await;

        assert!(client_for(&server).health_check().await.unwrap());
    }

    #[tokio::test]
    async fn test_connection_refused() {
        // Nothing listens on port 9 of localhost in test environments
        let client = ResourceClient::new(&PlaceholderConfig::with_url("http://127.0.0.1:9")).unwrap();
        let result: ClientResult<Post> = client.fetch_resource("/posts/1").await;
        assert_matches!(result, Err(ClientError::ConnectionRefused(_)));
    }
}
