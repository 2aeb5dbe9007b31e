//! Schema owned by the service, plus readiness checks for imported tables
//!
//! Only `user_preferences` is created here. `chapters`, `verses` and
//! `commentaries` are provisioned by the import pipeline.

use sqlx::PgPool;

/// SQLSTATE `unique_violation`: raised by a concurrent `CREATE TABLE IF NOT EXISTS`
const UNIQUE_VIOLATION: &str = "23505";

/// SQLSTATE `duplicate_table`
const DUPLICATE_TABLE: &str = "42P07";

/// Tables written by the external import pipeline
pub const IMPORTED_TABLES: [&str; 3] = ["chapters", "verses", "commentaries"];

/// Table owned by this service
pub const PREFERENCES_TABLE: &str = "user_preferences";

const CREATE_PREFERENCES: &str = r#"
    CREATE TABLE IF NOT EXISTS user_preferences (
        chat_id BIGINT PRIMARY KEY,
        source TEXT NOT NULL,
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

/// Create the preferences table if it is missing.
///
/// Idempotent; losing a creation race to another process counts as success.
pub async fn ensure_preference_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    let mut conn = pool.acquire().await?;

    match sqlx::query(CREATE_PREFERENCES).execute(&mut *conn).await {
        Ok(_) => {}
        Err(sqlx::Error::Database(e))
            if matches!(e.code().as_deref(), Some(UNIQUE_VIOLATION | DUPLICATE_TABLE)) =>
        {
            tracing::debug!("preference table created concurrently");
        }
        Err(e) => return Err(e),
    }

    tracing::info!(table = PREFERENCES_TABLE, "preference schema ready");
    Ok(())
}

/// Presence of one table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableStatus {
    pub name: &'static str,
    pub exists: bool,
}

/// Report which of the expected tables exist on the connection's search path.
pub async fn table_status(pool: &PgPool) -> Result<Vec<TableStatus>, sqlx::Error> {
    let mut conn = pool.acquire().await?;
    let mut statuses = Vec::with_capacity(IMPORTED_TABLES.len() + 1);

    for name in IMPORTED_TABLES.into_iter().chain([PREFERENCES_TABLE]) {
        let (exists,): (bool,) = sqlx::query_as("SELECT to_regclass($1) IS NOT NULL")
            .bind(name)
            .fetch_one(&mut *conn)
            .await?;
        statuses.push(TableStatus { name, exists });
    }

    Ok(statuses)
}
