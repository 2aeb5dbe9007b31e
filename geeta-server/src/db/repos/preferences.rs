//! Preference repository
//!
//! One row per chat. Writes are a single `INSERT .. ON CONFLICT` inside a
//! transaction, so concurrent writers for the same chat never create
//! duplicates; the last commit wins.

use sqlx::PgPool;

use crate::db::executor::{DbError, QueryExecutor};
use crate::models::{SourceKey, UserPreference};

/// Preference repository
pub struct PreferenceRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> PreferenceRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Stored preference for the chat, if any.
    pub async fn get(&self, chat_id: i64) -> Result<Option<UserPreference>, DbError> {
        QueryExecutor::new(self.pool)
            .fetch_one(
                "preferences.get",
                sqlx::query_as(
                    r#"
                    SELECT chat_id, source, updated_at
                    FROM user_preferences
                    WHERE chat_id = $1
                    "#,
                )
                .bind(chat_id),
            )
            .await
    }

    /// Insert or replace the chat's preference, refreshing `updated_at`.
    pub async fn upsert(&self, chat_id: i64, source: &SourceKey) -> Result<UserPreference, DbError> {
        const QUERY: &str = "preferences.upsert";

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DbError::from_sqlx(QUERY, e))?;

        let pref: UserPreference = sqlx::query_as(
            r#"
            INSERT INTO user_preferences (chat_id, source, updated_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (chat_id) DO UPDATE
            SET source = EXCLUDED.source,
                updated_at = NOW()
            RETURNING chat_id, source, updated_at
            "#,
        )
        .bind(chat_id)
        .bind(source.as_str())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| DbError::from_sqlx(QUERY, e))?;

        tx.commit().await.map_err(|e| DbError::from_sqlx(QUERY, e))?;

        tracing::debug!(chat_id, source = %pref.source, "preference stored");
        Ok(pref)
    }
}
