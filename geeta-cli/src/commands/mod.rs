//! Subcommand implementations

pub mod serve;
pub mod schema;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use geeta_server::db::{create_pool_with_options, PoolSettings};
use sqlx::PgPool;

/// Database connection options shared by every subcommand
#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true, value_parser = clap::builder::NonEmptyStringValueParser::new())]
    pub database_url: String,

    /// Seconds a request may wait for a pooled connection
    #[arg(long, env = "GEETA_ACQUIRE_TIMEOUT", default_value_t = 10)]
    pub acquire_timeout: u64,
}

impl DatabaseArgs {
    pub async fn connect(&self) -> Result<PgPool> {
        let settings = PoolSettings {
            acquire_timeout: Duration::from_secs(self.acquire_timeout),
            ..PoolSettings::default()
        };

        create_pool_with_options(&self.database_url, settings)
            .await
            .context("Failed to create database pool")
    }
}
