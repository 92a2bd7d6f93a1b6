//! Product search query construction.
//!
//! [`QueryBuilder`] turns request-level [`SearchParameters`](crate::types::SearchParameters)
//! into a [`QueryExpression`]: a small, structured tree of clauses that is
//! only rendered to the store's query DSL at the backend boundary.
//!
//! # Example
//!
//! ```
//! use storefront_persistence::search::QueryBuilder;
//! use storefront_persistence::types::{PriceRange, SearchParameters};
//!
//! let params = SearchParameters::new()
//!     .with_category("Electronics")
//!     .with_price_range(PriceRange::new(100.0, 500.0));
//!
//! let expr = QueryBuilder::new().build(&params);
//! assert_eq!(expr.clauses().len(), 2);
//!
//! let body = expr.to_body();
//! assert_eq!(body["query"]["bool"]["filter"][0]["term"]["category"], "Electronics");
//! ```

mod expression;
mod query_builder;

pub use expression::{Clause, QueryExpression, fields};
pub use query_builder::QueryBuilder;
