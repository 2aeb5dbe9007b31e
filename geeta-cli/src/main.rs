//! geeta CLI - runs and maintains the scripture HTTP API
//!
//! - `serve`: run the HTTP API
//! - `bootstrap`: create the preference table
//! - `check`: report whether the imported tables exist
//!
//! Configuration comes from flags, the environment, or a `.env` file.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "geeta",
    author,
    version,
    about = "HTTP API for chapters, verses and commentaries"
)]
struct Cli {
    /// Debug logging (unless RUST_LOG is set)
    #[arg(long, global = true)]
    debug: bool,

    /// Export traces over OTLP (requires the `telemetry` feature)
    #[arg(long, global = true)]
    otel: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Create the user preference table if it does not exist
    Bootstrap(commands::schema::BootstrapArgs),
    /// Check that the imported tables exist
    Check(commands::schema::CheckArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig {
        debug: cli.debug,
        otel: cli.otel,
    })?;

    let result = match cli.command {
        Commands::Serve(args) => commands::serve::run_serve(args).await,
        Commands::Bootstrap(args) => commands::schema::run_bootstrap(args).await,
        Commands::Check(args) => commands::schema::run_check(args).await,
    };

    tracing_setup::shutdown_otel();
    result
}
