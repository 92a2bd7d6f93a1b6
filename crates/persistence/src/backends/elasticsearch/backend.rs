//! Elasticsearch store: client construction, configuration and health.

use std::fmt::Debug;
use std::time::Duration;

use async_trait::async_trait;
use elasticsearch::Elasticsearch;
use elasticsearch::auth::Credentials;
use elasticsearch::cert::CertificateValidation;
use elasticsearch::http::transport::{SingleNodeConnectionPool, TransportBuilder};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{Backend, BackendKind};
use crate::error::BackendError;

pub(crate) const BACKEND_NAME: &str = "elasticsearch";

/// Credentials sent with every request to the cluster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ElasticsearchAuth {
    /// HTTP basic auth.
    Basic {
        /// User name.
        username: String,
        /// Password.
        password: String,
    },
    /// `Authorization: Bearer` token.
    Bearer {
        /// Token value.
        token: String,
    },
}

/// Connection settings for [`ElasticsearchBackend`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElasticsearchConfig {
    /// Cluster URLs. Only the first one is dialled.
    #[serde(default = "default_nodes")]
    pub nodes: Vec<String>,

    /// Product index name (default: `"products"`).
    #[serde(default = "default_index")]
    pub index: String,

    /// Per-request timeout in milliseconds, applied by the transport.
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    /// Credentials, if the cluster requires them.
    #[serde(default)]
    pub auth: Option<ElasticsearchAuth>,

    /// Skip TLS certificate checks. For local clusters with self-signed certs.
    #[serde(default)]
    pub disable_certificate_validation: bool,
}

fn default_nodes() -> Vec<String> {
    vec!["http://localhost:9200".to_string()]
}

fn default_index() -> String {
    "products".to_string()
}

fn default_request_timeout_ms() -> u64 {
    30000
}

impl Default for ElasticsearchConfig {
    fn default() -> Self {
        Self {
            nodes: default_nodes(),
            index: default_index(),
            request_timeout_ms: default_request_timeout_ms(),
            auth: None,
            disable_certificate_validation: false,
        }
    }
}

/// Elasticsearch backend for product search and indexing.
///
/// Cloning the underlying client is cheap and the transport is safe to share
/// across tasks, so one backend serves every request.
pub struct ElasticsearchBackend {
    client: Elasticsearch,
    config: ElasticsearchConfig,
}

impl Debug for ElasticsearchBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElasticsearchBackend")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ElasticsearchBackend {
    /// Builds the client for `config`.
    ///
    /// No request is sent; an unreachable cluster only shows up on first use
    /// or through [`Backend::health_check`].
    pub fn new(config: ElasticsearchConfig) -> Result<Self, BackendError> {
        let client = Self::build_client(&config)?;
        tracing::debug!(
            node = config.nodes.first().map(String::as_str).unwrap_or_default(),
            index = %config.index,
            "Elasticsearch client created"
        );
        Ok(Self { client, config })
    }

    fn build_client(config: &ElasticsearchConfig) -> Result<Elasticsearch, BackendError> {
        let url = config.nodes.first().ok_or_else(|| BackendError::ConnectionFailed {
            backend_name: BACKEND_NAME.to_string(),
            message: "no Elasticsearch nodes configured".to_string(),
        })?;

        let parsed_url: elasticsearch::http::Url =
            url.parse().map_err(|e| BackendError::ConnectionFailed {
                backend_name: BACKEND_NAME.to_string(),
                message: format!("Invalid URL '{}': {}", url, e),
            })?;

        let conn_pool = SingleNodeConnectionPool::new(parsed_url);

        let mut builder = TransportBuilder::new(conn_pool)
            .timeout(Duration::from_millis(config.request_timeout_ms));

        if config.disable_certificate_validation {
            builder = builder.cert_validation(CertificateValidation::None);
        }

        if let Some(ref auth) = config.auth {
            builder = match auth {
                ElasticsearchAuth::Basic { username, password } => {
                    builder.auth(Credentials::Basic(username.clone(), password.clone()))
                }
                ElasticsearchAuth::Bearer { token } => {
                    builder.auth(Credentials::Bearer(token.clone()))
                }
            };
        }

        let transport = builder.build().map_err(|e| BackendError::ConnectionFailed {
            backend_name: BACKEND_NAME.to_string(),
            message: format!("transport setup failed: {}", e),
        })?;

        Ok(Elasticsearch::new(transport))
    }

    pub(crate) fn client(&self) -> &Elasticsearch {
        &self.client
    }

    /// Connection settings this backend was built from.
    pub fn config(&self) -> &ElasticsearchConfig {
        &self.config
    }

    /// Returns the configured product index.
    pub fn index(&self) -> &str {
        &self.config.index
    }
}

/// Maps a transport-level failure.
pub(crate) fn unavailable(context: &str, e: elasticsearch::Error) -> BackendError {
    BackendError::Unavailable {
        backend_name: BACKEND_NAME.to_string(),
        message: format!("{}: {}", context, e),
    }
}

/// Reads the body of an error response.
pub(crate) async fn upstream_status(response: elasticsearch::http::response::Response) -> BackendError {
    let status = response.status_code();
    let body = response.text().await.unwrap_or_default();
    BackendError::UpstreamStatus {
        backend_name: BACKEND_NAME.to_string(),
        status: status.to_string(),
        body,
    }
}

#[async_trait]
impl Backend for ElasticsearchBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Elasticsearch
    }

    fn name(&self) -> &'static str {
        BACKEND_NAME
    }

    async fn health_check(&self) -> Result<(), BackendError> {
        let response = self
            .client
            .cluster()
            .health(elasticsearch::cluster::ClusterHealthParts::None)
            .send()
            .await
            .map_err(|e| unavailable("health check failed", e))?;

        if !response.status_code().is_success() {
            return Err(upstream_status(response).await);
        }

        let body = response
            .json::<Value>()
            .await
            .map_err(|e| BackendError::Internal {
                backend_name: BACKEND_NAME.to_string(),
                message: format!("undecodable cluster health response: {}", e),
                source: None,
            })?;

        let cluster_status = body
            .get("status")
            .and_then(|s| s.as_str())
            .unwrap_or("unknown");

        if cluster_status == "red" {
            return Err(BackendError::Unavailable {
                backend_name: BACKEND_NAME.to_string(),
                message: "cluster health is red".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = ElasticsearchConfig::default();
        assert_eq!(config.nodes, vec!["http://localhost:9200"]);
        assert_eq!(config.index, "products");
        assert_eq!(config.request_timeout_ms, 30000);
        assert!(config.auth.is_none());
    }

    #[test]
    fn test_config_from_partial_json() {
        let config: ElasticsearchConfig =
            serde_json::from_str(r#"{ "index": "catalog", "auth": { "Bearer": { "token": "t" } } }"#)
                .unwrap();
        assert_eq!(config.index, "catalog");
        assert_eq!(config.nodes, vec!["http://localhost:9200"]);
        assert!(matches!(config.auth, Some(ElasticsearchAuth::Bearer { .. })));
    }

    #[test]
    fn test_backend_kind() {
        let backend = ElasticsearchBackend::new(ElasticsearchConfig::default()).unwrap();
        assert_eq!(backend.kind(), BackendKind::Elasticsearch);
        assert_eq!(backend.name(), "elasticsearch");
        assert_eq!(backend.index(), "products");
    }

    #[test]
    fn test_invalid_url_fails() {
        let config = ElasticsearchConfig {
            nodes: vec!["not a url".to_string()],
            ..Default::default()
        };
        let err = ElasticsearchBackend::new(config).unwrap_err();
        assert!(matches!(err, BackendError::ConnectionFailed { .. }));
    }

    #[test]
    fn test_no_nodes_fails() {
        let config = ElasticsearchConfig {
            nodes: vec![],
            ..Default::default()
        };
        let err = ElasticsearchBackend::new(config).unwrap_err();
        assert!(err.to_string().contains("no Elasticsearch nodes"));
    }
}
