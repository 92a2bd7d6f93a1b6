//! Search parameters extractor.
//!
//! Extracts product search parameters from the query string.

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use storefront_persistence::types::{PriceRange, SearchParameters};

use crate::error::RestError;

/// Query string key for free-text search.
pub const QUERY_PARAM: &str = "query";
/// Query string key for the category filter.
pub const CATEGORY_PARAM: &str = "category";
/// Query string key for the price range filter.
pub const PRICE_RANGE_PARAM: &str = "priceRange";

/// Axum extractor for product search parameters.
///
/// Reads `query`, `category` and `priceRange` from the query string. When a
/// key repeats, its first value wins. Empty values are treated as absent and
/// unknown keys are ignored. A `priceRange`
/// that is not `<min>-<max>` rejects the request with
/// [`RestError::InvalidArgument`] before the handler runs.
///
/// # Example
///
/// ```rust,ignore
/// use storefront_rest::extractors::SearchParamsExtractor;
///
/// async fn search_handler(SearchParamsExtractor(params): SearchParamsExtractor) {
///     println!("{:?}", params.text_query);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchParamsExtractor(pub SearchParameters);

impl SearchParamsExtractor {
    /// Builds search parameters from raw query pairs, in request order.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Result<Self, RestError> {
        let take = |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
                .filter(|v| !v.is_empty())
        };

        let text_query = take(QUERY_PARAM);
        let category = take(CATEGORY_PARAM);
        let price_range = take(PRICE_RANGE_PARAM)
            .map(|raw| raw.parse::<PriceRange>())
            .transpose()?;

        Ok(Self(SearchParameters {
            text_query,
            category,
            price_range,
        }))
    }

    /// Returns the extracted parameters.
    pub fn into_inner(self) -> SearchParameters {
        self.0
    }
}

impl<S> FromRequestParts<S> for SearchParamsExtractor
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|e| RestError::InvalidArgument {
                message: format!("Invalid query parameters: {}", e),
            })?;

        Self::from_pairs(pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_from_pairs_all_parameters() {
        let params = SearchParamsExtractor::from_pairs(pairs(&[
            ("query", "phone"),
            ("category", "Electronics"),
            ("priceRange", "100-500"),
        ]))
        .unwrap()
        .into_inner();

        assert_eq!(params.text_query.as_deref(), Some("phone"));
        assert_eq!(params.category.as_deref(), Some("Electronics"));
        assert_eq!(params.price_range, Some(PriceRange::new(100.0, 500.0)));
    }

    #[test]
    fn test_empty_values_are_absent() {
        let params = SearchParamsExtractor::from_pairs(pairs(&[
            ("query", ""),
            ("category", ""),
            ("priceRange", ""),
        ]))
        .unwrap()
        .into_inner();

        assert!(params.is_empty());
    }

    #[test]
    fn test_first_value_of_repeated_key_wins() {
        let params = SearchParamsExtractor::from_pairs(pairs(&[
            ("query", "phone"),
            ("query", "tablet"),
            ("priceRange", "1-2"),
            ("priceRange", "abc"),
        ]))
        .unwrap()
        .into_inner();

        assert_eq!(params.text_query.as_deref(), Some("phone"));
        assert_eq!(params.price_range, Some(PriceRange::new(1.0, 2.0)));
    }

    #[test]
    fn test_empty_first_value_is_absent() {
        let params =
            SearchParamsExtractor::from_pairs(pairs(&[("category", ""), ("category", "Books")]))
                .unwrap()
                .into_inner();
        assert!(params.category.is_none());
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let params = SearchParamsExtractor::from_pairs(pairs(&[("color", "red")]))
            .unwrap()
            .into_inner();
        assert!(params.is_empty());
    }

    #[test]
    fn test_malformed_price_range_rejected() {
        for raw in ["abc", "10", "10-", "-5-10"] {
            let err = SearchParamsExtractor::from_pairs(pairs(&[("priceRange", raw)])).unwrap_err();
            assert!(
                matches!(err, RestError::InvalidArgument { .. }),
                "{} should be rejected",
                raw
            );
        }
    }
}
