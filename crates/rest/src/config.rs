//! Server configuration for the product search API.
//!
//! This module provides configuration types for the REST server, supporting
//! both programmatic configuration and environment variable overrides.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `STOREFRONT_PORT` | 8080 | Server port |
//! | `STOREFRONT_HOST` | 0.0.0.0 | Host to bind |
//! | `STOREFRONT_LOG_LEVEL` | info | Log level |
//! | `STOREFRONT_REQUEST_TIMEOUT` | 35 | Request timeout (seconds), must exceed the store timeout |
//! | `STOREFRONT_ENABLE_CORS` | false | Enable CORS |
//! | `STOREFRONT_CORS_ORIGINS` | * | Allowed origins |
//! | `STOREFRONT_CORS_HEADERS` | Content-Type,Accept | Allowed headers |
//! | `STOREFRONT_ELASTICSEARCH_NODES` | http://localhost:9200 | Comma-separated store nodes |
//! | `STOREFRONT_ELASTICSEARCH_USERNAME` | | Basic auth user |
//! | `STOREFRONT_ELASTICSEARCH_PASSWORD` | | Basic auth password |
//! | `STOREFRONT_INDEX` | products | Product index |
//! | `STOREFRONT_STORE_TIMEOUT_MS` | 30000 | Store request timeout (milliseconds) |
//!
//! # Example
//!
//! ```rust
//! use storefront_rest::ServerConfig;
//!
//! // Create from environment
//! let config = ServerConfig::from_env();
//!
//! // Or create programmatically
//! let config = ServerConfig {
//!     port: 3000,
//!     index: "catalog".to_string(),
//!     ..Default::default()
//! };
//! assert_eq!(config.socket_addr(), "0.0.0.0:3000");
//! ```

use clap::Parser;

/// Server configuration for the product search API.
///
/// This struct can be constructed from environment variables using [`ServerConfig::from_env`],
/// from command line arguments using [`ServerConfig::parse`], or programmatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "storefront")]
#[command(about = "Product search service")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "STOREFRONT_PORT", default_value = "8080")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "STOREFRONT_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "STOREFRONT_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Request timeout in seconds. Must be longer than the store timeout.
    #[arg(long, env = "STOREFRONT_REQUEST_TIMEOUT", default_value = "35")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "STOREFRONT_ENABLE_CORS", default_value = "false")]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "STOREFRONT_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Allowed CORS headers (comma-separated, or * for all).
    #[arg(long, env = "STOREFRONT_CORS_HEADERS", default_value = "Content-Type,Accept")]
    pub cors_headers: String,

    /// Elasticsearch node URLs (comma-separated).
    #[arg(
        long,
        env = "STOREFRONT_ELASTICSEARCH_NODES",
        default_value = "http://localhost:9200"
    )]
    pub elasticsearch_nodes: String,

    /// Elasticsearch basic auth username.
    #[arg(long, env = "STOREFRONT_ELASTICSEARCH_USERNAME")]
    pub elasticsearch_username: Option<String>,

    /// Elasticsearch basic auth password.
    #[arg(long, env = "STOREFRONT_ELASTICSEARCH_PASSWORD")]
    pub elasticsearch_password: Option<String>,

    /// Product index searched by `/search`.
    #[arg(long, env = "STOREFRONT_INDEX", default_value = "products")]
    pub index: String,

    /// Store request timeout in milliseconds.
    #[arg(long, env = "STOREFRONT_STORE_TIMEOUT_MS", default_value = "30000")]
    pub store_timeout_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "0.0.0.0".to_string(),
            log_level: "info".to_string(),
            request_timeout: 35,
            enable_cors: false,
            cors_origins: "*".to_string(),
            cors_headers: "Content-Type,Accept".to_string(),
            elasticsearch_nodes: "http://localhost:9200".to_string(),
            elasticsearch_username: None,
            elasticsearch_password: None,
            index: "products".to_string(),
            store_timeout_ms: 30000,
        }
    }
}

impl ServerConfig {
    /// Creates a new ServerConfig from environment variables.
    ///
    /// This is a convenience method that parses environment variables without
    /// requiring command line arguments.
    pub fn from_env() -> Self {
        Self::try_parse_from(["storefront"]).unwrap_or_default()
    }

    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the configured Elasticsearch nodes, trimmed, empty entries removed.
    pub fn elasticsearch_node_list(&self) -> Vec<String> {
        self.elasticsearch_nodes
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if self.store_timeout_ms == 0 {
            errors.push("Store timeout cannot be 0".to_string());
        }

        if self.request_timeout.saturating_mul(1000) <= self.store_timeout_ms {
            errors.push(format!(
                "Request timeout ({}s) must be longer than the store timeout ({}ms)",
                self.request_timeout, self.store_timeout_ms
            ));
        }

        if self.index.trim().is_empty() {
            errors.push("Index name cannot be empty".to_string());
        }

        if self.elasticsearch_node_list().is_empty() {
            errors.push("At least one Elasticsearch node is required".to_string());
        }

        if self.elasticsearch_username.is_some() != self.elasticsearch_password.is_some() {
            errors.push("Elasticsearch username and password must be set together".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Creates a configuration suitable for testing.
    ///
    /// This uses ephemeral port 0 and disables features that might interfere
    /// with tests.
    pub fn for_testing() -> Self {
        Self {
            port: 0, // Let OS assign port
            host: "127.0.0.1".to_string(),
            log_level: "debug".to_string(),
            request_timeout: 5,
            enable_cors: false,
            index: "test-products".to_string(),
            store_timeout_ms: 1000,
            ..Default::default()
        }
    }
}
