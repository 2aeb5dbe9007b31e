//! HTTP server command

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{ensure, Context, Result};
use clap::Parser;

use geeta_server::http::{run_server, ServerConfig};

use super::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    #[command(flatten)]
    pub db: DatabaseArgs,

    /// Shared secret clients send in the `x-api-key` header
    #[arg(long, env = "API_KEY", hide_env_values = true, value_parser = clap::builder::NonEmptyStringValueParser::new())]
    pub api_key: String,

    /// Address to bind to
    #[arg(long, short = 'b', env = "GEETA_BIND", default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Per-request timeout in seconds; must exceed --acquire-timeout
    #[arg(long, env = "GEETA_REQUEST_TIMEOUT", default_value_t = 30)]
    pub request_timeout: u64,
}

/// Pool exhaustion should surface as a failed query, not a request timeout.
fn check_timeouts(acquire_secs: u64, request_secs: u64) -> Result<()> {
    ensure!(
        acquire_secs < request_secs,
        "--acquire-timeout ({acquire_secs}s) must be shorter than --request-timeout ({request_secs}s)"
    );
    Ok(())
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    check_timeouts(args.db.acquire_timeout, args.request_timeout)?;
    tracing::info!("Starting geeta API on {}", args.bind);

    let pool = args.db.connect().await?;

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
        request_timeout: Duration::from_secs(args.request_timeout),
    };

    // Blocks until shutdown; closes the pool before returning
    run_server(pool, args.api_key, config)
        .await
        .context("Server error")?;

    Ok(())
}
