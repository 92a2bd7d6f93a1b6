//! Sequential bulk loading through a [`ResilientWriter`].

use serde::Serialize;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::core::DocumentStorage;
use crate::types::Product;

use super::retry::{ResilientWriter, WriteOutcome};

/// Summary of a bulk load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Documents handed to the writer.
    pub attempted: usize,
    /// Documents the store acknowledged.
    pub succeeded: usize,
    /// Documents that could not be written.
    pub failed: usize,
    /// Ids of the failed documents, in load order.
    pub failed_ids: Vec<String>,
}

impl LoadReport {
    /// Returns true if every attempted document was written.
    pub fn is_complete(&self) -> bool {
        self.failed == 0
    }
}

/// Writes a sequence of products one at a time.
///
/// A document that fails after all retries is logged and skipped; the load
/// always runs to the end of the sequence.
#[derive(Debug)]
pub struct BulkLoader<S> {
    writer: ResilientWriter<S>,
}

impl<S: DocumentStorage> BulkLoader<S> {
    /// Creates a loader over `writer`.
    pub fn new(writer: ResilientWriter<S>) -> Self {
        Self { writer }
    }

    /// Returns the underlying writer.
    pub fn writer(&self) -> &ResilientWriter<S> {
        &self.writer
    }

    /// Writes every product in order and reports the totals.
    pub async fn load<I>(&self, products: I) -> LoadReport
    where
        I: IntoIterator<Item = Product>,
    {
        let started = Instant::now();
        let mut report = LoadReport::default();

        for product in products {
            report.attempted += 1;

            match self.writer.write_with_retry(&product).await {
                WriteOutcome::Success { attempts } => {
                    debug!(id = product.id(), attempts, "Indexed product");
                    report.succeeded += 1;
                }
                WriteOutcome::Failure(e) => {
                    warn!(
                        id = product.id(),
                        attempts = e.attempts(),
                        error = %e,
                        "Failed to index product"
                    );
                    report.failed += 1;
                    report.failed_ids.push(product.id);
                }
            }
        }

        let elapsed = std::time::Duration::from_millis(started.elapsed().as_millis() as u64);
        info!(
            index = self.writer.index(),
            attempted = report.attempted,
            succeeded = report.succeeded,
            failed = report.failed,
            elapsed = %humantime::format_duration(elapsed),
            "Bulk load complete"
        );

        report
    }
}
