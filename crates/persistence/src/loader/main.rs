//! Product Loader CLI
//!
//! Seeds a product index with synthetic documents, writing each one through
//! the resilient writer so transient store failures are retried.
//!
//! # Usage
//!
//! ```bash
//! # Load the default 1000 products into http://localhost:9200/products
//! product-loader
//!
//! # Load into a different cluster with a longer backoff
//! product-loader --elasticsearch-nodes http://es:9200 --initial-backoff 500ms
//!
//! # Bound each attempt
//! LOADER_ATTEMPT_TIMEOUT=2s product-loader --count 50
//! ```
//!
//! When the load finishes, the [`LoadReport`] is printed to stdout as JSON.
//!
//! [`LoadReport`]: storefront_persistence::write::LoadReport

use std::time::Duration;

use clap::Parser;
use storefront_persistence::backends::elasticsearch::{ElasticsearchBackend, ElasticsearchConfig};
use storefront_persistence::types::synthetic_products;
use storefront_persistence::write::{BulkLoader, ResilientWriter, RetryConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Loads synthetic products into Elasticsearch.
#[derive(Debug, Parser)]
#[command(name = "product-loader", version, about)]
struct LoaderArgs {
    /// Number of products to generate.
    #[arg(long, env = "LOADER_COUNT", default_value = "1000")]
    count: usize,

    /// Total write attempts per product.
    #[arg(long, env = "LOADER_MAX_ATTEMPTS", default_value = "3")]
    max_attempts: u32,

    /// Delay after the first failed attempt (e.g. "100ms", "1s").
    #[arg(long, env = "LOADER_INITIAL_BACKOFF", default_value = "100ms", value_parser = humantime::parse_duration)]
    initial_backoff: Duration,

    /// Factor applied to the backoff after each further failure.
    #[arg(long, env = "LOADER_BACKOFF_MULTIPLIER", default_value = "2.0")]
    backoff_multiplier: f64,

    /// Upper bound for a single write attempt.
    #[arg(long, env = "LOADER_ATTEMPT_TIMEOUT", value_parser = humantime::parse_duration)]
    attempt_timeout: Option<Duration>,

    /// Elasticsearch node URLs (comma-separated).
    #[arg(
        long,
        env = "STOREFRONT_ELASTICSEARCH_NODES",
        default_value = "http://localhost:9200",
        value_delimiter = ','
    )]
    elasticsearch_nodes: Vec<String>,

    /// Target index.
    #[arg(long, env = "STOREFRONT_INDEX", default_value = "products")]
    index: String,

    /// Store request timeout in milliseconds.
    #[arg(long, env = "STOREFRONT_STORE_TIMEOUT_MS", default_value = "30000")]
    store_timeout_ms: u64,
}

impl LoaderArgs {
    fn retry_config(&self) -> RetryConfig {
        RetryConfig {
            max_attempts: self.max_attempts,
            initial_delay: self.initial_backoff,
            backoff_multiplier: self.backoff_multiplier,
            attempt_timeout: self.attempt_timeout,
            ..Default::default()
        }
    }

    fn elasticsearch_config(&self) -> ElasticsearchConfig {
        ElasticsearchConfig {
            nodes: self.elasticsearch_nodes.clone(),
            index: self.index.clone(),
            request_timeout_ms: self.store_timeout_ms,
            ..Default::default()
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,storefront_persistence=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = LoaderArgs::parse();

    let retry = args.retry_config();
    if let Err(errors) = retry.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    let backend = ElasticsearchBackend::new(args.elasticsearch_config())?;
    let writer = ResilientWriter::new(backend, args.index.clone(), retry);
    let loader = BulkLoader::new(writer);

    tracing::info!(
        count = args.count,
        index = %args.index,
        max_attempts = args.max_attempts,
        initial_backoff = %humantime::format_duration(args.initial_backoff),
        "Starting product load"
    );

    tokio::select! {
        report = loader.load(synthetic_products(args.count)) => {
            if !report.is_complete() {
                tracing::warn!(failed_ids = ?report.failed_ids, "Some products were not indexed");
            }
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received, load cancelled");
        }
    }

    Ok(())
}
