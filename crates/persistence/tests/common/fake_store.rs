//! In-memory document store with scripted failures.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;
use storefront_persistence::core::DocumentStorage;
use storefront_persistence::error::BackendError;
use tokio::time::Instant;

/// How the fake store answers writes.
#[derive(Debug, Clone)]
pub enum FailurePlan {
    /// Every write succeeds.
    Succeed,
    /// The first `n` calls fail with `Unavailable`, later calls succeed.
    FailFirst(u32),
    /// Every write fails with an error status.
    AlwaysFail,
    /// Writes for these ids always fail; every other write succeeds.
    FailIds(HashSet<String>),
    /// Writes never complete.
    Hang,
}

/// One recorded call to [`DocumentStorage::index_document`].
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub index: String,
    pub id: String,
    pub document: Value,
    pub at: Instant,
}

/// A [`DocumentStorage`] that records every call.
#[derive(Debug)]
pub struct FakeStore {
    plan: FailurePlan,
    calls: Mutex<Vec<RecordedCall>>,
    documents: Mutex<HashMap<String, Value>>,
}

impl FakeStore {
    pub fn new(plan: FailurePlan) -> Self {
        Self {
            plan,
            calls: Mutex::new(Vec::new()),
            documents: Mutex::new(HashMap::new()),
        }
    }

    pub fn succeeding() -> Self {
        Self::new(FailurePlan::Succeed)
    }

    pub fn failing_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(FailurePlan::FailIds(ids.into_iter().map(Into::into).collect()))
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Ids in the order they were attempted, repeats included.
    pub fn attempted_ids(&self) -> Vec<String> {
        self.calls.lock().iter().map(|c| c.id.clone()).collect()
    }

    /// Gaps between consecutive attempts.
    pub fn gaps(&self) -> Vec<std::time::Duration> {
        let calls = self.calls.lock();
        calls.windows(2).map(|w| w[1].at - w[0].at).collect()
    }

    pub fn stored(&self, id: &str) -> Option<Value> {
        self.documents.lock().get(id).cloned()
    }

    pub fn stored_count(&self) -> usize {
        self.documents.lock().len()
    }
}

#[async_trait]
impl DocumentStorage for FakeStore {
    fn backend_name(&self) -> &'static str {
        "fake"
    }

    async fn index_document(
        &self,
        index: &str,
        id: &str,
        document: Value,
    ) -> Result<(), BackendError> {
        let call_number = {
            let mut calls = self.calls.lock();
            calls.push(RecordedCall {
                index: index.to_string(),
                id: id.to_string(),
                document: document.clone(),
                at: Instant::now(),
            });
            calls.len() as u32
        };

        let fail = match &self.plan {
            FailurePlan::Succeed => false,
            FailurePlan::FailFirst(n) => call_number <= *n,
            FailurePlan::AlwaysFail => {
                return Err(BackendError::UpstreamStatus {
                    backend_name: "fake".to_string(),
                    status: "503 Service Unavailable".to_string(),
                    body: "{\"error\":\"unavailable_shards_exception\"}".to_string(),
                });
            }
            FailurePlan::FailIds(ids) => ids.contains(id),
            FailurePlan::Hang => {
                std::future::pending::<()>().await;
                false
            }
        };

        if fail {
            return Err(BackendError::Unavailable {
                backend_name: "fake".to_string(),
                message: format!("connection reset on call {}", call_number),
            });
        }

        self.documents.lock().insert(id.to_string(), document);
        Ok(())
    }
}
