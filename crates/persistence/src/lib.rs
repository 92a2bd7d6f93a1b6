//! Storefront Persistence Layer
//!
//! This crate holds everything between an HTTP request and the product index:
//! the product document model, translation of search parameters into a
//! structured boolean query, resilient single-document writes with bounded
//! exponential backoff, and the Elasticsearch backend behind both.
//!
//! # Features
//!
//! - `elasticsearch` (default) - Elasticsearch backend
//! - `loader` - the `product-loader` binary that seeds an index with
//!   synthetic products
//!
//! # Architecture
//!
//! - [`types`] - Products and search parameters
//! - [`search`] - Query expressions and the query builder
//! - [`write`] - Retrying writer and bulk loader
//! - [`core`] - Store traits ([`SearchProvider`], [`DocumentStorage`], [`Backend`])
//! - [`error`] - Error types for all operations
//! - [`backends`] - Backend implementations
//!
//! # Quick Start
//!
//! ```
//! use storefront_persistence::search::QueryBuilder;
//! use storefront_persistence::types::{PriceRange, SearchParameters};
//!
//! let params = SearchParameters::new()
//!     .with_text_query("phone")
//!     .with_category("Electronics")
//!     .with_price_range("100-500".parse::<PriceRange>()?);
//!
//! let body = QueryBuilder::new().build(&params).to_body();
//! assert_eq!(body["query"]["bool"]["must"][0]["match"]["name"], "phone");
//! # Ok::<(), storefront_persistence::error::ValidationError>(())
//! ```
//!
//! # Writing
//!
//! ```no_run
//! # #[cfg(feature = "elasticsearch")]
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! use storefront_persistence::backends::elasticsearch::{ElasticsearchBackend, ElasticsearchConfig};
//! use storefront_persistence::types::synthetic_products;
//! use storefront_persistence::write::{BulkLoader, ResilientWriter, RetryConfig};
//!
//! let backend = ElasticsearchBackend::new(ElasticsearchConfig::default())?;
//! let writer = ResilientWriter::new(backend, "products", RetryConfig::default());
//! let report = BulkLoader::new(writer).load(synthetic_products(1000)).await;
//! println!("{} of {} indexed", report.succeeded, report.attempted);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod backends;
pub mod core;
pub mod error;
pub mod search;
pub mod types;
pub mod write;

// Re-export commonly used types at crate root
pub use error::{BackendError, StorageError, StorageResult, ValidationError, WriteError};
pub use types::{PriceRange, Product, SearchParameters};

// Re-export core traits
pub use core::{Backend, BackendKind, DocumentStorage, SearchProvider};

pub use search::{QueryBuilder, QueryExpression};
pub use write::{BulkLoader, LoadReport, ResilientWriter, RetryConfig, WriteOutcome};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
