//! Resilient document writes.
//!
//! [`ResilientWriter`] turns one logical write into up to
//! [`RetryConfig::max_attempts`] store calls separated by exponential backoff.
//! [`BulkLoader`] drives a writer over a sequence of products and keeps going
//! past individual failures.
//!
//! With the default [`RetryConfig`] a write that keeps failing is attempted
//! three times, sleeping 100ms and then 200ms in between.

mod loader;
mod retry;

pub use loader::{BulkLoader, LoadReport};
pub use retry::{ResilientWriter, RetryConfig, WriteOutcome};
