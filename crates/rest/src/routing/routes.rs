//! Route configuration.
//!
//! Defines all routes for the product search API.

use axum::{Router, routing::get};
use storefront_persistence::core::{Backend, SearchProvider};

use crate::handlers;
use crate::state::AppState;

/// Creates all API routes.
///
/// # Routes
///
/// - `GET /` - Greeting
/// - `GET /search` - Product search
/// - `GET /health` - Health check
/// - `GET /_liveness` - Liveness probe
/// - `GET /_readiness` - Readiness probe (checks the store)
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: SearchProvider + Backend + 'static,
{
    Router::new()
        .route("/", get(handlers::root_handler))
        .route("/search", get(handlers::search_handler::<S>))
        .route("/health", get(handlers::health_handler::<S>))
        .route("/_liveness", get(handlers::liveness_handler))
        .route("/_readiness", get(handlers::readiness_handler::<S>))
        .with_state(state)
}
