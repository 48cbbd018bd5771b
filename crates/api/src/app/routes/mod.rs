use axum::Router;

pub mod system;
pub mod warehouses;

/// Router for all warehouse endpoints.
pub fn router() -> Router {
    Router::new().merge(warehouses::router())
}
