//! Store backend implementations.
//!
//! Each backend implements the traits in [`crate::core`] and is gated behind
//! a feature flag.
//!
//! | Backend | Feature | Description |
//! |---------|---------|-------------|
//! | Elasticsearch | `elasticsearch` | Full-text product search and document indexing |

#[cfg(feature = "elasticsearch")]
pub mod elasticsearch;
