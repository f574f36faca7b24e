//! ALP proxy binary entry point.
//!
//! Loads configuration, initializes tracing, and starts the pass-through
//! proxy in front of the inference backend.

use alp_common::SystemConfig;
use alp_proxy::ProxyServer;
use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "alp-proxy")]
#[command(version = "0.1.0")]
#[command(about = "Pass-through proxy for the Adaptive LLaMA Proxy backend")]
struct Cli {
    /// Path to configuration file; defaults are used when omitted
    #[arg(short, long)]
    config: Option<String>,

    /// Host to bind to (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config)
    #[arg(long)]
    port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level)?;

    info!("ALP proxy v0.1.0 starting");

    let mut config = match &cli.config {
        Some(path) => SystemConfig::load(path).map_err(|e| {
            error!("Failed to load configuration: {}", e);
            e
        })?,
        None => SystemConfig::default(),
    };

    if let Some(host) = cli.host {
        config.proxy.host = host;
    }
    if let Some(port) = cli.port {
        config.proxy.port = port;
    }
    config.validate().context("Invalid configuration")?;

    info!("Configuration loaded successfully");
    info!("Backend: {}", config.backend.url);
    if config.backend.api_key.is_none() {
        info!("No API key configured; requests are forwarded unauthenticated");
    }

    let server = ProxyServer::new(config)?;
    server.run().await
}

fn init_tracing(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .context("Failed to create tracing filter")?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .try_init()
        .context("Failed to initialize tracing")?;

    Ok(())
}
