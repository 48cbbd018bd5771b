//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: shared state (the warehouse registry behind a lock)
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request/response DTOs, operand parsing and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router with a fresh, empty registry.
pub fn build_app() -> Router {
    build_app_with(Arc::new(services::AppServices::new()))
}

/// Build the router around existing services (lets callers inspect or reset state).
pub fn build_app_with(services: Arc<services::AppServices>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router().layer(Extension(services)))
        .layer(ServiceBuilder::new().layer(axum::middleware::from_fn(middleware::request_trace)))
}
