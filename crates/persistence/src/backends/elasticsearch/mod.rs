//! Elasticsearch backend implementation.
//!
//! A single [`ElasticsearchBackend`] implements both store seams:
//!
//! - [`SearchProvider`](crate::core::SearchProvider): renders the query
//!   expression and sends it to `POST /{index}/_search`
//! - [`DocumentStorage`](crate::core::DocumentStorage): one
//!   `PUT /{index}/_doc/{id}` per call, never retried internally
//!
//! Transport failures surface as `BackendError::Unavailable`, non-2xx
//! responses as `BackendError::UpstreamStatus` with the response body.
//!
//! # Example
//!
//! ```no_run
//! use storefront_persistence::backends::elasticsearch::{ElasticsearchBackend, ElasticsearchConfig};
//!
//! let config = ElasticsearchConfig {
//!     nodes: vec!["http://localhost:9200".to_string()],
//!     ..Default::default()
//! };
//! let backend = ElasticsearchBackend::new(config)?;
//! # Ok::<(), storefront_persistence::error::BackendError>(())
//! ```

mod backend;
mod search_impl;
mod storage;

pub use backend::{ElasticsearchAuth, ElasticsearchBackend, ElasticsearchConfig};
