//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits. The pool is the only
//! shared mutable resource; it is created once at startup, handed to the
//! router as state, and closed after the server stops.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Connections kept open even when idle.
pub const MIN_CONNECTIONS: u32 = 1;

/// Upper bound on live connections.
pub const MAX_CONNECTIONS: u32 = 10;

/// Default time a request waits for a free connection. Shorter than the
/// default request timeout, so an exhausted pool fails the query first.
pub const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);

/// Pool sizing and timeouts
#[derive(Debug, Clone, Copy)]
pub struct PoolSettings {
    pub min_connections: u32,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            min_connections: MIN_CONNECTIONS,
            max_connections: MAX_CONNECTIONS,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
        }
    }
}

/// Create a PostgreSQL connection pool with the default settings.
///
/// # Errors
///
/// Returns an error if the URL is invalid or the first connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("postgres://localhost/geeta").await?;
/// ```
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(database_url, PoolSettings::default()).await
}

/// Create a PostgreSQL connection pool with custom settings.
///
/// Connects eagerly so an unreachable database fails at startup.
pub async fn create_pool_with_options(
    database_url: &str,
    settings: PoolSettings,
) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .min_connections(settings.min_connections)
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .connect(database_url)
        .await?;

    tracing::info!(
        min = settings.min_connections,
        max = settings.max_connections,
        "database pool ready"
    );
    Ok(pool)
}

/// Drain and close every connection in the pool.
pub async fn close_pool(pool: &PgPool) {
    tracing::info!(idle = pool.num_idle(), size = pool.size(), "closing database pool");
    pool.close().await;
}
