//! Backend abstraction for store drivers.
//!
//! This module defines the [`Backend`] trait, implemented by every store
//! driver to report what it is and whether it is healthy.

use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::BackendError;

/// Identifies the type of store backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    /// Elasticsearch (search engine).
    Elasticsearch,
    /// Custom or unknown backend, e.g. an in-memory fake in tests.
    Custom(&'static str),
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendKind::Elasticsearch => write!(f, "elasticsearch"),
            BackendKind::Custom(name) => write!(f, "{}", name),
        }
    }
}

/// A store backend that can execute storage operations.
#[async_trait]
pub trait Backend: Send + Sync + Debug {
    /// Returns the kind of backend.
    fn kind(&self) -> BackendKind;

    /// Returns a human-readable name for this backend.
    fn name(&self) -> &'static str;

    /// Checks if the backend is reachable and serving requests.
    async fn health_check(&self) -> Result<(), BackendError>;
}

#[async_trait]
impl<T: Backend + ?Sized> Backend for Arc<T> {
    fn kind(&self) -> BackendKind {
        (**self).kind()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }

    async fn health_check(&self) -> Result<(), BackendError> {
        (**self).health_check().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_kind_display() {
        assert_eq!(BackendKind::Elasticsearch.to_string(), "elasticsearch");
        assert_eq!(BackendKind::Custom("memory").to_string(), "memory");
    }
}
