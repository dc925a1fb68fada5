//! HTTP server command
//!
//! Settings come from the environment (and `.env`); flags override them.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use devbook_core::Config;
use devbook_server::db::{create_pool, migrate};
use devbook_server::http::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: API_HOST:API_PORT, else 127.0.0.1:3332)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Database URL (overrides DATABASE_URL / DB_NAME)
    #[arg(long)]
    pub database_url: Option<String>,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = Config::from_env();

    let bind_addr = match args.bind {
        Some(addr) => addr,
        None => config.bind_addr().with_context(|| {
            format!(
                "API_HOST {:?} is not an IP address; pass --bind instead",
                config.host
            )
        })?,
    };
    let database_url = args.database_url.unwrap_or(config.database_url);

    tracing::info!(%bind_addr, database_url = %database_url, "Starting devbook server");

    let pool = create_pool(&database_url)
        .await
        .with_context(|| format!("Failed to open database {}", database_url))?;
    migrate(&pool).await.context("Failed to apply schema")?;

    let server = ServerConfig {
        bind_addr,
        cors_permissive: args.cors_permissive,
    };

    // Blocks until shutdown
    run_server(pool, server).await.context("Server error")?;

    Ok(())
}
