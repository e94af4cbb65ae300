//! leadline server binary
//!
//! Serves the callback lifecycle API over HTTP. Configuration comes from
//! CLI flags with DATABASE_URL (env or .env) as the connection fallback.

use std::net::SocketAddr;

use anyhow::{anyhow, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use leadline::ServerConfig;

/// Server command-line arguments
#[derive(Parser, Debug)]
#[command(name = "leadline", version, about = "Customer callback lifecycle API server")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "3030")]
    port: u16,

    /// Bind address
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,

    /// PostgreSQL connection string (defaults to $DATABASE_URL)
    #[arg(long)]
    database_url: Option<String>,
}

fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing().ok();

    let args = Args::parse();
    let defaults = ServerConfig::default();
    let config = ServerConfig {
        bind_addr: SocketAddr::new(args.bind.parse()?, args.port),
        database_url: args.database_url.unwrap_or(defaults.database_url),
    };

    leadline::serve(config).await?;
    Ok(())
}
