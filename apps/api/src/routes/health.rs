//! Health check HTTP route handlers
//!
//! Provides endpoints for checking the health of the API and its upstream:
//! - `GET /health` - Simple liveness check (returns 200 OK)
//! - `GET /health/ready` - Readiness check (pings the upstream REST API)
//! - `GET /health/live` - Kubernetes-style liveness probe

use std::time::{Duration, Instant};

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use graphqlzero_placeholder_client::ResourceClient;
use serde::Serialize;

/// Shared application state for health check handlers
#[derive(Clone)]
pub struct HealthState {
    /// Client used to ping the upstream API
    pub client: ResourceClient,
}

impl HealthState {
    pub fn new(client: ResourceClient) -> Self {
        Self { client }
    }
}

/// Status of the upstream API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UpstreamStatus {
    Healthy,
    Unhealthy,
}

/// Result of pinging the upstream API
#[derive(Debug, Clone, Serialize)]
pub struct UpstreamHealth {
    pub url: String,
    pub status: UpstreamStatus,
    pub response_time_ms: u64,
    /// Error message if unhealthy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Readiness response body
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    /// `ready` or `unavailable`
    pub status: &'static str,
    pub upstream: UpstreamHealth,
    pub version: &'static str,
}

/// Create health check router
pub fn health_router(state: HealthState) -> Router {
    Router::new()
        .route("/", get(simple_health))
        .route("/live", get(liveness_probe))
        .route("/ready", get(readiness_probe))
        .with_state(state)
}

/// Simple health check - always returns OK if the server is running
///
/// # Response
/// - 200 OK with body "OK"
async fn simple_health() -> &'static str {
    "OK"
}

/// Liveness probe for Kubernetes
///
/// Does not touch the upstream; that's what readiness is for.
async fn liveness_probe() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Readiness probe - checks that the upstream API answers
///
/// # Response
/// - 200 OK if the upstream answered with a success status
/// - 503 Service Unavailable otherwise
async fn readiness_probe(State(state): State<HealthState>) -> impl IntoResponse {
    let start = Instant::now();
    let result = state.client.health_check().await;
    let upstream = upstream_health(state.client.config().base_url(), result, start.elapsed());

    let (status_code, status) = match upstream.status {
        UpstreamStatus::Healthy => (StatusCode::OK, "ready"),
        UpstreamStatus::Unhealthy => {
            tracing::warn!(
                upstream = %upstream.url,
                error = ?upstream.error,
                "Readiness check failed"
            );
            (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
        }
    };

    let response = ReadinessResponse {
        status,
        upstream,
        version: env!("CARGO_PKG_VERSION"),
    };
    (status_code, Json(response))
}

fn upstream_health(
    url: &str,
    result: graphqlzero_placeholder_client::ClientResult<bool>,
    elapsed: Duration,
) -> UpstreamHealth {
    let (status, error) = match result {
        Ok(true) => (UpstreamStatus::Healthy, None),
        Ok(false) => (
            UpstreamStatus::Unhealthy,
            Some("upstream answered with an error status".to_string()),
        ),
        Err(e) => (UpstreamStatus::Unhealthy, Some(e.to_string())),
    };

    UpstreamHealth {
        url: url.to_string(),
        status,
        response_time_ms: elapsed.as_millis() as u64,
        error,
    }
}
