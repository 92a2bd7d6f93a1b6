//! Test infrastructure for the REST API.
//!
//! Provides an in-memory store with scripted search responses and a helper
//! that wires it into a [`TestServer`].

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum_test::TestServer;
use parking_lot::Mutex;
use serde_json::{Value, json};
use storefront_persistence::core::{Backend, BackendKind, SearchProvider};
use storefront_persistence::error::BackendError;
use storefront_persistence::search::QueryExpression;
use storefront_rest::{ServerConfig, create_app_with_config};

/// How the fake store answers searches.
#[derive(Debug, Clone)]
pub enum SearchScript {
    /// Return this document.
    Respond(Value),
    /// Fail as if the store were unreachable.
    Unavailable,
    /// Fail with this error status.
    Status(&'static str),
    /// Fail as if the response body were not JSON.
    Undecodable,
}

/// A store that records every search it receives.
#[derive(Debug)]
pub struct FakeSearchStore {
    script: SearchScript,
    healthy: bool,
    delay: Option<Duration>,
    requests: Mutex<Vec<(String, Value)>>,
}

impl FakeSearchStore {
    pub fn new(script: SearchScript) -> Self {
        Self {
            script,
            healthy: true,
            delay: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn unhealthy(mut self) -> Self {
        self.healthy = false;
        self
    }

    /// Makes every search wait `delay` before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Index and rendered body of every search, in order.
    pub fn requests(&self) -> Vec<(String, Value)> {
        self.requests.lock().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }
}

#[async_trait]
impl SearchProvider for FakeSearchStore {
    async fn search(&self, index: &str, query: &QueryExpression) -> Result<Value, BackendError> {
        self.requests
            .lock()
            .push((index.to_string(), query.to_body()));

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match &self.script {
            SearchScript::Respond(body) => Ok(body.clone()),
            SearchScript::Unavailable => Err(BackendError::Unavailable {
                backend_name: "fake".to_string(),
                message: "connection refused".to_string(),
            }),
            SearchScript::Status(status) => Err(BackendError::UpstreamStatus {
                backend_name: "fake".to_string(),
                status: status.to_string(),
                body: "{\"error\":{\"type\":\"index_not_found_exception\"}}".to_string(),
            }),
            SearchScript::Undecodable => Err(BackendError::Internal {
                backend_name: "fake".to_string(),
                message: "expected value at line 1 column 1".to_string(),
                source: None,
            }),
        }
    }
}

#[async_trait]
impl Backend for FakeSearchStore {
    fn kind(&self) -> BackendKind {
        BackendKind::Custom("fake")
    }

    fn name(&self) -> &'static str {
        "fake"
    }

    async fn health_check(&self) -> Result<(), BackendError> {
        if self.healthy {
            Ok(())
        } else {
            Err(BackendError::Unavailable {
                backend_name: "fake".to_string(),
                message: "cluster unreachable".to_string(),
            })
        }
    }
}

/// A typical store result document.
pub fn sample_hits() -> Value {
    json!({
        "took": 3,
        "timed_out": false,
        "hits": {
            "total": { "value": 1, "relation": "eq" },
            "max_score": 1.2,
            "hits": [{
                "_index": "test-products",
                "_id": "7",
                "_score": 1.2,
                "_source": {
                    "id": "7",
                    "name": "Product 7",
                    "description": "Description for Product 7",
                    "category": "Electronics",
                    "price": 70.0
                }
            }]
        }
    })
}

/// Starts a test server over `store` with the testing configuration.
pub fn create_test_server(store: Arc<FakeSearchStore>) -> TestServer {
    create_test_server_with_config(store, ServerConfig::for_testing())
}

/// Starts a test server over `store` with a custom configuration.
pub fn create_test_server_with_config(
    store: Arc<FakeSearchStore>,
    config: ServerConfig,
) -> TestServer {
    let app = create_app_with_config(store, config);
    TestServer::new(app).expect("Failed to create test server")
}
