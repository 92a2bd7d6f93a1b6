//! Core storage traits and abstractions.
//!
//! The rest of the crate reaches the store only through these traits, so any
//! component can be handed a fake implementation in tests:
//!
//! - [`Backend`] - Identity and health of a store driver
//! - [`SearchProvider`] - "execute a search query, return the raw result"
//! - [`DocumentStorage`] - "execute a single write, return success/failure"
//!
//! # Example: Implementing a Store
//!
//! ```
//! use async_trait::async_trait;
//! use serde_json::{Value, json};
//! use storefront_persistence::core::SearchProvider;
//! use storefront_persistence::error::BackendError;
//! use storefront_persistence::search::QueryExpression;
//!
//! struct EmptyStore;
//!
//! #[async_trait]
//! impl SearchProvider for EmptyStore {
//!     async fn search(
//!         &self,
//!         _index: &str,
//!         _query: &QueryExpression,
//!     ) -> Result<Value, BackendError> {
//!         Ok(json!({ "hits": { "total": { "value": 0 }, "hits": [] } }))
//!     }
//! }
//! ```

mod backend;
mod search;
mod storage;

pub use backend::{Backend, BackendKind};
pub use search::SearchProvider;
pub use storage::DocumentStorage;
