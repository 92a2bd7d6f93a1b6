//! Core types for the persistence layer.
//!
//! - [`Product`] - The document written to and searched in the store
//! - [`SearchParameters`], [`PriceRange`] - Per-request search input
//!
//! # Example
//!
//! ```
//! use storefront_persistence::types::{PriceRange, SearchParameters};
//!
//! let params = SearchParameters::new()
//!     .with_text_query("phone")
//!     .with_price_range(PriceRange::parse("100-500").unwrap());
//!
//! assert_eq!(params.price_range, Some(PriceRange::new(100.0, 500.0)));
//! ```

mod product;
mod search_params;

pub use product::{Product, synthetic_products};
pub use search_params::{PriceRange, SearchParameters};
