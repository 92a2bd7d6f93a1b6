//! Test infrastructure for the persistence layer.
//!
//! Provides an in-memory [`DocumentStorage`] whose failures are scripted per
//! test, plus assertion helpers for backoff timing on the paused tokio clock.

#![allow(dead_code)]

pub mod fake_store;

pub use fake_store::*;

use std::time::Duration;

/// Asserts that `actual` is `expected` on the virtual clock.
///
/// The timer wheel rounds deadlines to whole milliseconds, so a gap may land
/// up to one tick late.
pub fn assert_gap(actual: Duration, expected: Duration) {
    assert!(
        actual >= expected && actual < expected + Duration::from_millis(2),
        "expected a gap of {:?}, got {:?}",
        expected,
        actual
    );
}
