//! # storefront-rest - Product Search HTTP API
//!
//! This crate provides the HTTP surface of the Storefront search service: a
//! single search endpoint that turns optional query-string filters into a
//! structured store query and passes the store's result document straight
//! back to the client.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use storefront_rest::{create_app, ServerConfig};
//! use storefront_persistence::backends::elasticsearch::{ElasticsearchBackend, ElasticsearchConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Create a store backend
//!     let backend = ElasticsearchBackend::new(ElasticsearchConfig::default())?;
//!
//!     // Create the Axum application
//!     let app = create_app(backend);
//!
//!     // Start the server
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//!     axum::serve(listener, app).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## API Endpoints
//!
//! | Endpoint | Method | Description |
//! |----------|--------|-------------|
//! | `/` | GET | `Hello, World!` |
//! | `/search` | GET | Product search (`query`, `category`, `priceRange`) |
//! | `/health` | GET | Health check |
//! | `/_liveness` | GET | Liveness probe |
//! | `/_readiness` | GET | Readiness probe (checks the store) |
//!
//! ## Error Handling
//!
//! Errors are returned as plain text:
//!
//! | HTTP Status | Cause |
//! |-------------|-------|
//! | 400 | `priceRange` is not `<min>-<max>` |
//! | 408 | Request exceeded the configured timeout |
//! | 500 | Store unreachable, store error status, undecodable store response |
//! | 503 | Readiness check failed |
//!
//! ## Architecture
//!
//! - [`error`] - Error types and status mapping
//! - [`config`] - Server configuration
//! - [`state`] - Application state (store, configuration)
//! - [`handlers`] - HTTP request handlers
//! - [`extractors`] - Axum extractors for search parameters
//! - [`routing`] - Route configuration

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod routing;
pub mod state;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::{RestError, RestResult};
pub use state::AppState;

use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderName, HeaderValue, Method};
use storefront_persistence::core::{Backend, SearchProvider};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Creates the Axum application with default configuration.
///
/// This is a convenience function that creates the app with default settings.
/// For more control, use [`create_app_with_config`].
pub fn create_app<S>(storage: S) -> Router
where
    S: SearchProvider + Backend + 'static,
{
    create_app_with_config(storage, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// This function sets up all routes, the shared state and the middleware
/// stack (tracing, request timeout, optional CORS).
///
/// # Example
///
/// ```rust,ignore
/// use storefront_rest::{create_app_with_config, ServerConfig};
///
/// let config = ServerConfig {
///     index: "catalog".to_string(),
///     enable_cors: true,
///     ..Default::default()
/// };
/// let app = create_app_with_config(backend, config);
/// ```
pub fn create_app_with_config<S>(storage: S, config: ServerConfig) -> Router
where
    S: SearchProvider + Backend + 'static,
{
    info!(
        backend = storage.name(),
        index = %config.index,
        "Creating REST API server"
    );

    // Create application state
    let state = AppState::new(Arc::new(storage), config.clone());

    let router = routing::create_routes(state);

    // Build middleware stack
    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::REQUEST_TIMEOUT,
            std::time::Duration::from_secs(config.request_timeout),
        ));

    // Add CORS if enabled
    let router = if config.enable_cors {
        let cors = build_cors_layer(&config);
        router.layer(cors)
    } else {
        router
    };

    // Apply remaining middleware
    router.layer(service_builder)
}

/// Builds the CORS layer. The API is read-only, so only `GET` and the
/// preflight `OPTIONS` are allowed.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods([Method::GET, Method::OPTIONS]);

    let cors = match parse_cors_list::<HeaderValue>(&config.cors_origins) {
        Some(origins) => cors.allow_origin(origins),
        None => cors.allow_origin(Any),
    };

    match parse_cors_list::<HeaderName>(&config.cors_headers) {
        Some(headers) => cors.allow_headers(headers),
        None => cors.allow_headers(Any),
    }
}

/// `None` for the `*` wildcard; unparsable entries are skipped.
fn parse_cors_list<T: std::str::FromStr>(raw: &str) -> Option<Vec<T>> {
    if raw.trim() == "*" {
        return None;
    }
    Some(
        raw.split(',')
            .filter_map(|entry| entry.trim().parse().ok())
            .collect(),
    )
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup. `RUST_LOG` takes
/// precedence over `level` when set.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "storefront_rest={level},storefront_persistence={level},storefront={level},tower_http=debug"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
