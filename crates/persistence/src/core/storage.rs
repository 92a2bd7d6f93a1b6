//! Document write trait.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::BackendError;

/// Single-document writes against a store.
///
/// One call is one attempt: implementations must not retry internally. A
/// transport failure is reported as [`BackendError::Unavailable`] and an error
/// status from the store as [`BackendError::UpstreamStatus`]; any `Ok` means
/// the store acknowledged the write.
///
/// Writes are upserts: a document with an existing `id` replaces the stored
/// version.
#[async_trait]
pub trait DocumentStorage: Send + Sync {
    /// Returns a human-readable name for this storage backend.
    fn backend_name(&self) -> &'static str;

    /// Writes `document` under `id` in `index`.
    async fn index_document(
        &self,
        index: &str,
        id: &str,
        document: Value,
    ) -> Result<(), BackendError>;
}

#[async_trait]
impl<T: DocumentStorage + ?Sized> DocumentStorage for Arc<T> {
    fn backend_name(&self) -> &'static str {
        (**self).backend_name()
    }

    async fn index_document(
        &self,
        index: &str,
        id: &str,
        document: Value,
    ) -> Result<(), BackendError> {
        (**self).index_document(index, id, document).await
    }
}
