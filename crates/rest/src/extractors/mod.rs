//! Axum extractors for search requests.
//!
//! - [`SearchParamsExtractor`] - Extract and validate product search parameters

mod search_params;

pub use search_params::{
    CATEGORY_PARAM, PRICE_RANGE_PARAM, QUERY_PARAM, SearchParamsExtractor,
};
