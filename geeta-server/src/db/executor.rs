//! Query executor - parameterized reads mapped onto typed records
//!
//! Every call borrows one connection for exactly one statement; the
//! connection goes back to the pool when the guard drops, including on
//! error. Database failures are logged here and re-raised as [`DbError`]
//! without driver text.

use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::QueryAs;
use sqlx::{FromRow, PgPool, Postgres};

/// SQLSTATE for `undefined_table`
const UNDEFINED_TABLE: &str = "42P01";

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A table the query needs does not exist yet (import not run)
    #[error("schema not ready for {query}")]
    SchemaNotReady { query: &'static str },

    /// Any other data-access failure
    #[error("{query} failed: {kind}")]
    QueryFailed {
        query: &'static str,
        kind: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

impl DbError {
    /// Classify and log a driver error for the named query class.
    pub fn from_sqlx(query: &'static str, err: sqlx::Error) -> Self {
        if is_undefined_table(&err) {
            tracing::warn!(query, error = %err, "table missing, schema not ready");
            return Self::SchemaNotReady { query };
        }

        let kind = error_kind(&err);
        tracing::error!(query, kind, error = %err, "database query failed");
        Self::QueryFailed {
            query,
            kind,
            source: err,
        }
    }
}

fn is_undefined_table(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Database(db) if db.code().as_deref() == Some(UNDEFINED_TABLE)
    )
}

/// Short name of the error variant, safe to show to clients.
pub fn error_kind(err: &sqlx::Error) -> &'static str {
    match err {
        sqlx::Error::Configuration(_) => "Configuration",
        sqlx::Error::Database(_) => "Database",
        sqlx::Error::Io(_) => "Io",
        sqlx::Error::Tls(_) => "Tls",
        sqlx::Error::Protocol(_) => "Protocol",
        sqlx::Error::RowNotFound => "RowNotFound",
        sqlx::Error::TypeNotFound { .. } => "TypeNotFound",
        sqlx::Error::ColumnIndexOutOfBounds { .. } => "ColumnIndexOutOfBounds",
        sqlx::Error::ColumnNotFound(_) => "ColumnNotFound",
        sqlx::Error::ColumnDecode { .. } => "ColumnDecode",
        sqlx::Error::Decode(_) => "Decode",
        sqlx::Error::PoolTimedOut => "PoolTimedOut",
        sqlx::Error::PoolClosed => "PoolClosed",
        sqlx::Error::WorkerCrashed => "WorkerCrashed",
        _ => "Other",
    }
}

/// Thin wrapper issuing parameterized queries against the pool
#[derive(Clone, Copy)]
pub struct QueryExecutor<'a> {
    pool: &'a PgPool,
}

impl<'a> QueryExecutor<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Run a read query and return every row, in database order.
    pub async fn fetch_all<'q, T>(
        &self,
        query_class: &'static str,
        query: QueryAs<'q, Postgres, T, PgArguments>,
    ) -> Result<Vec<T>, DbError>
    where
        T: Send + Unpin + for<'r> FromRow<'r, PgRow>,
    {
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(|e| DbError::from_sqlx(query_class, e))?;

        query
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| DbError::from_sqlx(query_class, e))
    }

    /// Run a read query and return the first row, if any.
    pub async fn fetch_one<'q, T>(
        &self,
        query_class: &'static str,
        query: QueryAs<'q, Postgres, T, PgArguments>,
    ) -> Result<Option<T>, DbError>
    where
        T: Send + Unpin + for<'r> FromRow<'r, PgRow>,
    {
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(|e| DbError::from_sqlx(query_class, e))?;

        query
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| DbError::from_sqlx(query_class, e))
    }
}
