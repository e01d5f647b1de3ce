//! Borrowers MCP server binary
//!
//! Spawned by an MCP client as a tool server. Speaks JSON-RPC on stdout;
//! all logging goes to stderr.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use borrowers::providers::{BorrowerProvider, RemoteProvider};
use borrowers_mcp::mcp;

/// Borrowers MCP server: get and search borrowers over stdio
#[derive(Parser, Debug)]
#[command(name = "borrowers-mcp", version, about)]
struct Args {
    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .compact()
        .init();

    let provider = RemoteProvider::new().context("Failed to create HTTP client")?;
    tracing::debug!("Using {} at {}", provider.name(), provider.url());

    mcp::server::run(&provider).context("MCP server failed")?;
    Ok(())
}
