//! DocumentStorage implementation for the Elasticsearch backend.

use async_trait::async_trait;
use elasticsearch::IndexParts;
use serde_json::Value;

use crate::core::DocumentStorage;
use crate::error::BackendError;

use super::backend::{BACKEND_NAME, ElasticsearchBackend, unavailable, upstream_status};

#[async_trait]
impl DocumentStorage for ElasticsearchBackend {
    fn backend_name(&self) -> &'static str {
        BACKEND_NAME
    }

    async fn index_document(
        &self,
        index: &str,
        id: &str,
        document: Value,
    ) -> Result<(), BackendError> {
        let response = self
            .client()
            .index(IndexParts::IndexId(index, id))
            .body(document)
            .send()
            .await
            .map_err(|e| unavailable("index request failed", e))?;

        if !response.status_code().is_success() {
            return Err(upstream_status(response).await);
        }

        Ok(())
    }
}
