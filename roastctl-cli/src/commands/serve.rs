//! HTTP server command
//!
//! Opens the store, makes sure the schema exists, then serves until
//! Ctrl+C / SIGTERM. Any failure before the server is listening is fatal.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

use roastctl_server::db::{ensure_schema, open_pool_with_options, SqliteStore};
use roastctl_server::{run_server, AppState, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "ROASTCTL_BIND", default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    /// SQLite database file (created if missing), or ":memory:"
    #[arg(long, short = 'd', env = "ROASTCTL_DATABASE", default_value = "coffees.db")]
    pub database: String,

    /// Maximum pooled database connections
    #[arg(long, env = "ROASTCTL_MAX_CONNECTIONS", default_value_t = 5)]
    pub max_connections: u32,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!(database = %args.database, "Opening record store");

    let pool = open_pool_with_options(&args.database, args.max_connections)
        .await
        .with_context(|| format!("Could not open database {}", args.database))?;

    ensure_schema(&pool)
        .await
        .context("Could not initialize database schema")?;

    let store = SqliteStore::new(pool);
    let config = ServerConfig {
        bind_addr: args.bind,
    };

    // Run server (blocks until shutdown)
    let result = run_server(AppState::new(store.clone()), config)
        .await
        .context("Server error");

    store.close().await;
    result
}
