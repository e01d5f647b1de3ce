//! Borrowers HTTP service
//!
//! Serves the local borrowers file over HTTP.
//!
//! Usage:
//!   borrowers-server --port 10000 --data data/borrowers.json
//!
//! The port can also be set with the `PORT` environment variable.

use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use borrowers::config::providers::DEFAULT_DATA_PATH;
use borrowers::providers::FileProvider;
use borrowers_server::build_router;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "borrowers-server")]
#[command(about = "HTTP service for the borrowers dataset")]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "10000")]
    port: u16,

    /// Path to the borrowers JSON file
    #[arg(short, long, default_value = DEFAULT_DATA_PATH)]
    data: PathBuf,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { "debug" } else { "info" };
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    if !args.data.exists() {
        warn!("Data file {:?} does not exist yet; requests will fail until it does", args.data);
    }

    let app = build_router(Arc::new(FileProvider::new(args.data)));
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", args.port))
        .await
        .with_context(|| format!("Failed to bind HTTP port {}", args.port))?;
    info!("Server running on port {}", args.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
