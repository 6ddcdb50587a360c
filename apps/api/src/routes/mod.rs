//! HTTP route handlers for the GraphQLZero API
//!
//! GraphQL itself is mounted in `main`; this module holds the plain HTTP
//! endpoints (health checks).

pub mod health;

pub use health::{health_router, HealthState};
