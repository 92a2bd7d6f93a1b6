//! HTTP request handlers.
//!
//! - [`search`] - Product search
//! - [`root`] - Greeting at `/`
//! - [`health`] - Health, liveness and readiness endpoints

pub mod health;
pub mod root;
pub mod search;

// Re-export handlers for convenience
pub use health::{health_handler, liveness_handler, readiness_handler};
pub use root::root_handler;
pub use search::search_handler;
