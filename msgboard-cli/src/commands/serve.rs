//! HTTP server command
//!
//! Runs the msgboard web server against the MySQL database described by
//! the `MYSQL_*` environment variables.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use msgboard_server::{run_server, DbConfig, MySqlStore, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "0.0.0.0:5000", env = "MSGBOARD_BIND")]
    pub bind: SocketAddr,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs, debug: bool) -> Result<()> {
    let db = DbConfig::from_env();
    tracing::info!(
        host = %db.host,
        port = db.port,
        database = %db.database,
        "Using MySQL database"
    );

    // No connection is made here; the first request dials the database
    let store = Arc::new(MySqlStore::new(&db));

    let config = ServerConfig {
        bind_addr: args.bind,
        debug,
    };

    run_server(store, config).await.context("Server error")?;

    Ok(())
}
