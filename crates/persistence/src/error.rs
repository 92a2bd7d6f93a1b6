//! Error types for the persistence layer.
//!
//! Errors are grouped by where they originate: malformed client input
//! ([`ValidationError`]), the remote store ([`BackendError`]) and the
//! resilient write path ([`WriteError`]). [`StorageError`] wraps all three so
//! callers can propagate with `?` and classify at the edge.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

/// The primary error type for all storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Client-supplied input could not be accepted.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The store rejected or could not serve a request.
    #[error(transparent)]
    Backend(#[from] BackendError),

    /// A document write did not complete.
    #[error(transparent)]
    Write(#[from] WriteError),
}

/// Errors related to client-supplied search input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The price range filter did not match `<min>-<max>`.
    #[error("invalid price range '{value}': {reason}")]
    InvalidPriceRange { value: String, reason: String },
}

/// Errors originating from the document store.
#[derive(Error, Debug)]
pub enum BackendError {
    /// The store could not be reached (transport or network failure).
    #[error("{backend_name} unavailable: {message}")]
    Unavailable {
        backend_name: String,
        message: String,
    },

    /// The store answered with an error status.
    #[error("{backend_name} returned {status}: {body}")]
    UpstreamStatus {
        backend_name: String,
        status: String,
        body: String,
    },

    /// The client could not be constructed from its configuration.
    #[error("connection failed to {backend_name}: {message}")]
    ConnectionFailed {
        backend_name: String,
        message: String,
    },

    /// Local failure while preparing a request or decoding a response.
    #[error("internal error in {backend_name}: {message}")]
    Internal {
        backend_name: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Errors produced by the resilient write path.
#[derive(Error, Debug)]
pub enum WriteError {
    /// The document could not be turned into its wire representation.
    /// Never retried.
    #[error("serialization error for document {id}: {message}")]
    Serialization { id: String, message: String },

    /// Every attempt failed.
    #[error("max retries exceeded after {attempts} attempts: {last_error}")]
    RetriesExhausted {
        attempts: u32,
        #[source]
        last_error: BackendError,
    },

    /// The caller's deadline elapsed before an attempt could succeed.
    #[error("deadline exceeded after {attempts} attempts")]
    DeadlineExceeded {
        attempts: u32,
        #[source]
        last_error: Option<BackendError>,
    },
}

impl WriteError {
    /// Number of store attempts made before giving up.
    pub fn attempts(&self) -> u32 {
        match self {
            WriteError::Serialization { .. } => 0,
            WriteError::RetriesExhausted { attempts, .. }
            | WriteError::DeadlineExceeded { attempts, .. } => *attempts,
        }
    }
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
