//! Error types for the product search API.
//!
//! Every error is rendered as a `text/plain` body carrying the error message.
//!
//! # Error Mapping
//!
//! | Source | RestError | HTTP Status |
//! |--------|-----------|-------------|
//! | `ValidationError` | InvalidArgument | 400 |
//! | `BackendError::Unavailable`, `ConnectionFailed` | Unavailable | 500 |
//! | `BackendError::UpstreamStatus` | UpstreamError | 500 |
//! | `BackendError::Internal`, `WriteError` | InternalError | 500 |
//! | failed readiness probe | ServiceUnavailable | 503 |

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;
use storefront_persistence::error::{BackendError, StorageError, ValidationError, WriteError};

/// The primary error type for REST API operations.
#[derive(Debug)]
pub enum RestError {
    /// Malformed client input (HTTP 400).
    InvalidArgument {
        /// Error message.
        message: String,
    },

    /// The store could not be reached (HTTP 500).
    Unavailable {
        /// Error message.
        message: String,
    },

    /// The store answered with an error status (HTTP 500).
    UpstreamError {
        /// Status reported by the store, e.g. `404 Not Found`.
        status: String,
        /// Error message.
        message: String,
    },

    /// Local failure, e.g. an undecodable store response (HTTP 500).
    InternalError {
        /// Error message.
        message: String,
    },

    /// The service cannot take traffic yet (HTTP 503).
    ServiceUnavailable {
        /// Error message.
        message: String,
    },
}

impl RestError {
    /// Classifies a failed search, prefixing the message with the phase
    /// that failed.
    pub fn from_search_error(err: BackendError) -> Self {
        match err {
            BackendError::Unavailable { .. } | BackendError::ConnectionFailed { .. } => {
                RestError::Unavailable {
                    message: format!("Error executing search: {}", err),
                }
            }
            BackendError::UpstreamStatus { status, .. } => RestError::UpstreamError {
                message: format!("Error in search response: {}", status),
                status,
            },
            BackendError::Internal { .. } => RestError::InternalError {
                message: format!("Error decoding search response: {}", err),
            },
        }
    }

    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::InvalidArgument { .. } => StatusCode::BAD_REQUEST,
            RestError::Unavailable { .. }
            | RestError::UpstreamError { .. }
            | RestError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            RestError::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::InvalidArgument { message }
            | RestError::Unavailable { message }
            | RestError::UpstreamError { message, .. }
            | RestError::InternalError { message }
            | RestError::ServiceUnavailable { message } => f.write_str(message),
        }
    }
}

impl std::error::Error for RestError {}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}

// Implement conversions from storage errors

impl From<StorageError> for RestError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Validation(e) => e.into(),
            StorageError::Backend(e) => e.into(),
            StorageError::Write(e) => e.into(),
        }
    }
}

impl From<ValidationError> for RestError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::InvalidPriceRange { reason, .. } => RestError::InvalidArgument {
                message: format!("Invalid price range format: {}", reason),
            },
        }
    }
}

impl From<BackendError> for RestError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Unavailable { .. } | BackendError::ConnectionFailed { .. } => {
                RestError::Unavailable {
                    message: err.to_string(),
                }
            }
            BackendError::UpstreamStatus { ref status, .. } => RestError::UpstreamError {
                status: status.clone(),
                message: err.to_string(),
            },
            BackendError::Internal { .. } => RestError::InternalError {
                message: err.to_string(),
            },
        }
    }
}

impl From<WriteError> for RestError {
    fn from(err: WriteError) -> Self {
        RestError::InternalError {
            message: err.to_string(),
        }
    }
}

/// Result type alias for REST operations.
pub type RestResult<T> = Result<T, RestError>;
