//! Product search handler.
//!
//! Implements `GET [base]/search?query=&category=&priceRange=`.

use std::time::Duration;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storefront_persistence::core::{Backend, SearchProvider};
use storefront_persistence::error::BackendError;
use storefront_persistence::search::QueryBuilder;
use tracing::{debug, warn};

use crate::error::{RestError, RestResult};
use crate::extractors::SearchParamsExtractor;
use crate::state::AppState;

/// Handler for product search.
///
/// Builds a query from the optional parameters, runs it against the
/// configured index and returns the store's result document unchanged.
///
/// The store call is bounded by `store_timeout_ms`. A store that does not
/// answer in time is reported like any other transport failure, so the
/// request-level timeout never preempts the classified 500.
///
/// # HTTP Request
///
/// `GET [base]/search?query=phone&category=Electronics&priceRange=100-500`
///
/// # Response
///
/// - `200 OK` - Raw store result (`application/json`)
/// - `400 Bad Request` - `priceRange` is not `<min>-<max>`
/// - `500 Internal Server Error` - Store unreachable or too slow, store error
///   status, or undecodable store response
pub async fn search_handler<S>(
    State(state): State<AppState<S>>,
    SearchParamsExtractor(params): SearchParamsExtractor,
) -> RestResult<Response>
where
    S: SearchProvider + Backend,
{
    debug!(
        index = state.index(),
        query = ?params.text_query,
        category = ?params.category,
        price_range = ?params.price_range,
        "Processing search request"
    );

    let expression = QueryBuilder::new().build(&params);

    let store_timeout = Duration::from_millis(state.config().store_timeout_ms);
    let search = state.storage().search(state.index(), &expression);

    let result = match tokio::time::timeout(store_timeout, search).await {
        Ok(result) => result,
        Err(_) => Err(BackendError::Unavailable {
            backend_name: state.storage().name().to_string(),
            message: format!("no answer within {}ms", store_timeout.as_millis()),
        }),
    }
    .map_err(|e| {
        warn!(index = state.index(), error = %e, "Search failed");
        RestError::from_search_error(e)
    })?;

    Ok((StatusCode::OK, Json(result)).into_response())
}
