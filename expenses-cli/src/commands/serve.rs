//! HTTP server command
//!
//! Connects to PostgreSQL, ensures the schema, then serves the expense API
//! until Ctrl+C or SIGTERM. Connection and schema failures are fatal.

use std::net::{SocketAddr, ToSocketAddrs};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use expenses_server::db::{create_pool_with_options, migrations, pool::DEFAULT_MAX_CONNECTIONS};
use expenses_server::http::server::DEFAULT_SHUTDOWN_TIMEOUT;
use expenses_server::{run_server, AppState, ExpenseRepo, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Listen address: `2565`, `:2565`, or `host:port`
    #[arg(long, short = 'p', env = "PORT", default_value = "2565", value_parser = parse_listen_addr)]
    pub port: SocketAddr,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Seconds to let in-flight requests finish after a shutdown signal
    #[arg(long, env = "SHUTDOWN_TIMEOUT_SECS", default_value_t = DEFAULT_SHUTDOWN_TIMEOUT.as_secs())]
    pub shutdown_timeout: u64,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let database_url = args
        .database_url
        .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")?;

    tracing::info!("Starting expenses server on {}", args.port);

    let pool = create_pool_with_options(&database_url, args.max_connections)
        .await
        .context("Failed to connect to database")?;

    migrations::run(&pool)
        .await
        .context("Failed to create expenses table")?;

    let config = ServerConfig {
        bind_addr: args.port,
        cors_permissive: args.cors_permissive,
        shutdown_timeout: Duration::from_secs(args.shutdown_timeout),
    };

    // Blocks until shutdown
    run_server(AppState::new(ExpenseRepo::new(pool)), config)
        .await
        .context("Server error")?;

    Ok(())
}

/// Parse a listen address. A bare port or `:port` binds every interface.
pub fn parse_listen_addr(s: &str) -> Result<SocketAddr, String> {
    let s = s.trim();
    let port_only = s.strip_prefix(':').unwrap_or(s);

    if let Ok(port) = port_only.parse::<u16>() {
        return Ok(SocketAddr::from(([0, 0, 0, 0], port)));
    }

    if let Ok(addr) = s.parse::<SocketAddr>() {
        return Ok(addr);
    }

    s.to_socket_addrs()
        .map_err(|e| format!("invalid listen address '{}': {}", s, e))?
        .next()
        .ok_or_else(|| format!("listen address '{}' resolved to nothing", s))
}
