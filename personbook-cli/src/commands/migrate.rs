//! Create the persons table ahead of the first request

use anyhow::{Context, Result};
use clap::Parser;

use personbook_server::db::{create_pool, migrations};

use super::DEFAULT_DATABASE_URL;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,
}

pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let pool = create_pool(&args.database_url)
        .await
        .context("Failed to connect to PostgreSQL")?;

    migrations::run(&pool)
        .await
        .context("Failed to create persons table")?;

    tracing::info!("Schema is up to date");
    Ok(())
}
