//! Schema migration command

use anyhow::{Context, Result};
use clap::Parser;
use devbook_core::Config;
use devbook_server::db::{create_pool, migrate};

#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Database URL (overrides DATABASE_URL / DB_NAME)
    #[arg(long)]
    pub database_url: Option<String>,
}

pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let database_url = match args.database_url {
        Some(url) => url,
        None => Config::from_env().database_url,
    };

    let pool = create_pool(&database_url)
        .await
        .with_context(|| format!("Failed to open database {}", database_url))?;
    migrate(&pool).await.context("Failed to apply schema")?;
    pool.close().await;

    tracing::info!(database_url = %database_url, "schema up to date");
    println!("migrated {}", database_url);
    Ok(())
}
