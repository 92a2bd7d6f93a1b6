//! Storefront Server
//!
//! Serves product search over an Elasticsearch index.

use clap::Parser;
use storefront_rest::{ServerConfig, init_logging};
use tracing::info;

#[cfg(feature = "elasticsearch")]
use storefront_rest::create_app_with_config;

#[cfg(feature = "elasticsearch")]
use storefront_persistence::backends::elasticsearch::{
    ElasticsearchAuth, ElasticsearchBackend, ElasticsearchConfig,
};

/// Creates the Elasticsearch backend from the server configuration.
#[cfg(feature = "elasticsearch")]
fn create_elasticsearch_backend(config: &ServerConfig) -> anyhow::Result<ElasticsearchBackend> {
    let es_nodes = config.elasticsearch_node_list();

    let es_auth = match (
        &config.elasticsearch_username,
        &config.elasticsearch_password,
    ) {
        (Some(username), Some(password)) => Some(ElasticsearchAuth::Basic {
            username: username.clone(),
            password: password.clone(),
        }),
        _ => None,
    };

    let es_config = ElasticsearchConfig {
        nodes: es_nodes.clone(),
        index: config.index.clone(),
        request_timeout_ms: config.store_timeout_ms,
        auth: es_auth,
        ..Default::default()
    };

    info!(
        nodes = ?es_nodes,
        index = %config.index,
        "Initializing Elasticsearch backend"
    );

    Ok(ElasticsearchBackend::new(es_config)?)
}

/// Starts the Axum HTTP server.
#[cfg(feature = "elasticsearch")]
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    info!(address = %addr, "Server listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

#[cfg(feature = "elasticsearch")]
async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received, stopping server...");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    info!(
        port = config.port,
        host = %config.host,
        index = %config.index,
        "Starting Storefront server"
    );

    start(config).await
}

/// Starts the server with the Elasticsearch backend.
#[cfg(feature = "elasticsearch")]
async fn start(config: ServerConfig) -> anyhow::Result<()> {
    let backend = create_elasticsearch_backend(&config)?;
    let app = create_app_with_config(backend, config.clone());
    serve(app, &config).await
}

/// Fallback when no store backend is enabled.
#[cfg(not(feature = "elasticsearch"))]
async fn start(_config: ServerConfig) -> anyhow::Result<()> {
    anyhow::bail!(
        "No store backend enabled. \
         Build with: cargo build -p storefront-server --features elasticsearch"
    )
}
