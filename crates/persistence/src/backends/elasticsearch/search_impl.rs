//! SearchProvider implementation for the Elasticsearch backend.

use async_trait::async_trait;
use elasticsearch::SearchParts;
use serde_json::Value;

use crate::core::SearchProvider;
use crate::error::BackendError;
use crate::search::QueryExpression;

use super::backend::{BACKEND_NAME, ElasticsearchBackend, unavailable, upstream_status};

#[async_trait]
impl SearchProvider for ElasticsearchBackend {
    async fn search(&self, index: &str, query: &QueryExpression) -> Result<Value, BackendError> {
        let body = query.to_body();
        tracing::debug!(index, query = %body, "Executing search");

        let response = self
            .client()
            .search(SearchParts::Index(&[index]))
            .body(body)
            .send()
            .await
            .map_err(|e| unavailable("search request failed", e))?;

        if !response.status_code().is_success() {
            return Err(upstream_status(response).await);
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| BackendError::Internal {
                backend_name: BACKEND_NAME.to_string(),
                message: format!("failed to decode search response: {}", e),
                source: None,
            })
    }
}
