//! Schema maintenance: bootstrap the preference table, check imported tables

use anyhow::{bail, Context, Result};
use clap::Parser;

use geeta_server::db::{close_pool, ensure_preference_schema, table_status, TableStatus};
use geeta_server::db::schema::PREFERENCES_TABLE;

use super::DatabaseArgs;

/// Arguments for the bootstrap command
#[derive(Parser, Debug)]
pub struct BootstrapArgs {
    #[command(flatten)]
    pub db: DatabaseArgs,
}

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub db: DatabaseArgs,
}

/// Create the preference table if needed
pub async fn run_bootstrap(args: BootstrapArgs) -> Result<()> {
    let pool = args.db.connect().await?;
    let result = ensure_preference_schema(&pool)
        .await
        .context("Failed to create preference schema");
    close_pool(&pool).await;
    result?;

    println!("{} ready", PREFERENCES_TABLE);
    Ok(())
}

/// Report table presence; fails when imported tables are missing
pub async fn run_check(args: CheckArgs) -> Result<()> {
    let pool = args.db.connect().await?;
    let result = table_status(&pool).await.context("Failed to inspect schema");
    close_pool(&pool).await;
    let statuses = result?;

    for status in &statuses {
        println!("{:<18} {}", status.name, if status.exists { "ok" } else { "missing" });
    }

    let missing = missing_imported(&statuses);
    if !missing.is_empty() {
        bail!("schema not ready, missing: {}", missing.join(", "));
    }
    Ok(())
}

/// Imported tables that are absent. The preference table is created on
/// demand and never counts as missing.
fn missing_imported(statuses: &[TableStatus]) -> Vec<&'static str> {
    statuses
        .iter()
        .filter(|s| !s.exists && s.name != PREFERENCES_TABLE)
        .map(|s| s.name)
        .collect()
}
