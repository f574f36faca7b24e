//! ALP TUI - terminal dashboard for the Adaptive LLaMA Proxy.
//!
//! Type a prompt, watch the complexity score and tier selection update
//! live, submit it through the proxy, and inspect the returned metrics.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use alp_tui::{application::Application, services::ApiService, Config};

#[derive(Parser)]
#[command(name = "alp-tui")]
#[command(version = "0.1.0")]
#[command(about = "Terminal dashboard for the Adaptive LLaMA Proxy")]
struct Cli {
    /// ALP proxy URL
    #[arg(short, long)]
    server: Option<String>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(
        cli.config.as_ref(),
        cli.server.as_ref(),
        cli.log_level.as_ref(),
    )?;

    // The terminal belongs to the dashboard, so logs go to a file. The
    // guard must outlive the application to flush buffered lines.
    let _guard = init_tracing(&config)?;

    info!("Starting ALP TUI client");
    info!("Server: {}", config.server_url);

    test_connectivity(&config).await?;

    let mut app = Application::new(config).await?;
    app.run().await?;

    info!("ALP TUI client shutting down");
    Ok(())
}

fn init_tracing(config: &Config) -> Result<Option<WorkerGuard>> {
    if !config.logging.log_to_file {
        return Ok(None);
    }

    let log_file = config
        .logging
        .log_file
        .clone()
        .unwrap_or_else(|| "alp-tui.log".to_string());
    let path = Path::new(&log_file);
    let directory = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "alp-tui.log".to_string());

    let appender = tracing_appender::rolling::never(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .context("Failed to create tracing filter")?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(writer).with_ansi(false).with_target(false))
        .with(filter)
        .try_init()
        .context("Failed to initialize tracing")?;

    Ok(Some(guard))
}

/// Probe the proxy before taking over the terminal; failure is not fatal.
async fn test_connectivity(config: &Config) -> Result<()> {
    info!("Testing connectivity to ALP proxy...");

    let api = ApiService::new(config).context("Failed to build API client")?;
    match api.health().await {
        Ok(status) => {
            info!("Connected to ALP proxy successfully (status: {})", status);
        }
        Err(e) => {
            warn!("Could not connect to ALP proxy: {}", e);
            warn!("Make sure the proxy is running at: {}", config.server_url);
            warn!("Starting anyway; submissions will fail until it is up");
        }
    }

    Ok(())
}
