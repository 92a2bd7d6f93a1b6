//! Application state for the product search API.
//!
//! This module defines the shared application state that is available to all
//! request handlers: the store client and the server configuration.

use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state for the REST API.
///
/// This struct holds all the shared state that handlers need access to,
/// including the store and server configuration.
///
/// # Type Parameters
///
/// * `S` - The store type (a `SearchProvider` + `Backend` in the router)
///
/// # Example
///
/// ```rust,ignore
/// use storefront_rest::{AppState, ServerConfig};
/// use storefront_persistence::backends::elasticsearch::{ElasticsearchBackend, ElasticsearchConfig};
/// use std::sync::Arc;
///
/// let backend = ElasticsearchBackend::new(ElasticsearchConfig::default())?;
/// let state = AppState::new(Arc::new(backend), ServerConfig::default());
/// ```
pub struct AppState<S> {
    /// The store.
    storage: Arc<S>,

    /// Server configuration.
    config: Arc<ServerConfig>,
}

// Manually implement Clone since S is wrapped in Arc and doesn't need to be Clone
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
            config: Arc::clone(&self.config),
        }
    }
}

impl<S> AppState<S> {
    /// Creates a new AppState with the given store and configuration.
    pub fn new(storage: Arc<S>, config: ServerConfig) -> Self {
        Self {
            storage,
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the store.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Returns a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Returns the product index searched by handlers.
    pub fn index(&self) -> &str {
        &self.config.index
    }
}
