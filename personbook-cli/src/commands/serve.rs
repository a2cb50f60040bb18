//! HTTP server command
//!
//! Runs the person record web app until Ctrl+C or SIGTERM.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use personbook_server::db::{create_lazy_pool, MemoryPersonStore, PersonStore, PgPersonStore};
use personbook_server::http::{run_server, ServerConfig};

use super::DEFAULT_DATABASE_URL;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, short = 'p', env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,

    /// Directory of static files (stylesheets, images)
    #[arg(long, env = "PERSONBOOK_PUBLIC_DIR", default_value = "public")]
    pub public_dir: PathBuf,

    /// Request timeout in seconds (at least 1)
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,

    /// Keep records in memory instead of PostgreSQL (lost on exit)
    #[arg(long)]
    pub memory: bool,
}

impl ServeArgs {
    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: SocketAddr::new(self.host, self.port),
            public_dir: self.public_dir.clone(),
            request_timeout: Duration::from_secs(self.timeout),
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = args.server_config();

    let store: Arc<dyn PersonStore> = if args.memory {
        tracing::warn!("Using in-memory store; records are lost on exit");
        Arc::new(MemoryPersonStore::new())
    } else {
        // Lazy: the server starts even if PostgreSQL is down and serves 503s.
        let pool = create_lazy_pool(&args.database_url)
            .context("Invalid DATABASE_URL")?;
        let store = PgPersonStore::new(pool);
        if store.is_available().await {
            tracing::info!("Connected to PostgreSQL");
        } else {
            tracing::warn!("PostgreSQL is not reachable yet; requests will get 503 until it is");
        }
        Arc::new(store)
    };

    run_server(store, config).await.context("Server error")?;

    Ok(())
}
