//! Search provider trait.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::BackendError;
use crate::search::QueryExpression;

/// Executes a query expression against a store index.
///
/// Implementations render the expression into their wire format at this
/// boundary and return the store's raw response document; callers that expose
/// it to clients pass it through untouched. Error classification:
///
/// | Failure | Variant |
/// |---------|---------|
/// | transport / network | [`BackendError::Unavailable`] |
/// | error status from the store | [`BackendError::UpstreamStatus`] |
/// | response body not valid JSON | [`BackendError::Internal`] |
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Runs `query` against `index` and returns the raw result.
    async fn search(&self, index: &str, query: &QueryExpression) -> Result<Value, BackendError>;
}

#[async_trait]
impl<T: SearchProvider + ?Sized> SearchProvider for Arc<T> {
    async fn search(&self, index: &str, query: &QueryExpression) -> Result<Value, BackendError> {
        (**self).search(index, query).await
    }
}
