//! Root greeting handler.

/// Handler for `GET /`.
///
/// Returns a fixed plain-text greeting, handy as a smoke test.
pub async fn root_handler() -> &'static str {
    "Hello, World!"
}
