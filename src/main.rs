//! Covidash server
//!
//! Run with: cargo run
//!
//! # Configuration
//!
//! Config file (`./config.toml` or `$XDG_CONFIG_HOME/covidash/config.toml`)
//! with environment overrides:
//! - `COVIDASH_DATA_FILE`: Path to the dataset CSV
//! - `COVIDASH_HOST`: Host to bind to (default: 0.0.0.0)
//! - `COVIDASH_PORT`: Port to listen on (default: 8050)
//! - `COVIDASH_CACHE_TTL_SECS`: Filter cache TTL (default: 60)
//! - `COVIDASH_LOG_LEVEL` / `COVIDASH_LOG_FORMAT`: Logging
//! - `RUST_LOG`: Overrides the log filter entirely
//!
//! Exits with status 1 before binding any socket if the dataset file is
//! missing or unreadable.

use clap::Parser;
use covidash::api::{serve, ApiConfig, AppState};
use covidash::cache::FilterCache;
use covidash::config::Config;
use covidash::dataset::Dataset;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "covidash")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "COVID-19 case dashboard over a static CSV dataset")]
struct Cli {
    /// Path to a TOML config file (default: search standard locations)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path to the dataset CSV (overrides config)
    #[arg(short, long)]
    data_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration before logging so the log level applies
    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };

    init_tracing(&config);

    tracing::info!("Starting covidash v{}", env!("CARGO_PKG_VERSION"));

    let data_file = cli
        .data_file
        .unwrap_or_else(|| PathBuf::from(&config.dataset.file));

    // The one distinguished fatal error: no dataset, no server.
    let dataset = match Dataset::load(&data_file) {
        Ok(dataset) => Arc::new(dataset),
        Err(e) => {
            tracing::error!("Exiting: {}", e);
            std::process::exit(1);
        }
    };

    let ttl = Duration::from_secs(config.cache.ttl_secs);
    let cache = Arc::new(FilterCache::new(Arc::clone(&dataset), ttl));

    let api_config = ApiConfig::new(config.api.host.clone(), config.api.port);
    let state = AppState::new(dataset, cache, api_config.clone());

    serve(state, &api_config).await?;

    tracing::info!("Covidash stopped");
    Ok(())
}

/// Initialize the tracing subscriber from config, honoring `RUST_LOG`.
fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!(
            "covidash={},tower_http=debug",
            config.logging.level
        ))
    });

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
