//! Commentary resolver
//!
//! Three read shapes over the commentaries of one verse:
//! - every row, verbatim
//! - per-source availability flags plus the default source
//! - a single clean text chosen by preferred source, then smallest source_key

use sqlx::PgPool;

use crate::db::executor::{DbError, QueryExecutor};
use crate::models::{CleanCommentary, Commentary, SourceKey, SourceListing};

/// Commentary repository
pub struct CommentaryRepo<'a> {
    db: QueryExecutor<'a>,
}

impl<'a> CommentaryRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self {
            db: QueryExecutor::new(pool),
        }
    }

    /// Every commentary for the verse, ordered by source_key bytewise
    /// (`COLLATE "C"`), independent of the database locale.
    pub async fn list(&self, verse_id: &str) -> Result<Vec<Commentary>, DbError> {
        self.db
            .fetch_all(
                "commentaries.list",
                sqlx::query_as(
                    r#"
                    SELECT source_key, author, et, ht, ec, hc, sc
                    FROM commentaries
                    WHERE verse_id = $1
                    ORDER BY source_key COLLATE "C"
                    "#,
                )
                .bind(verse_id),
            )
            .await
    }

    /// Which variants each source provides for the verse.
    pub async fn sources(&self, verse_id: &str) -> Result<SourceListing, DbError> {
        let rows = self.list(verse_id).await?;
        Ok(SourceListing::from_rows(&rows))
    }

    /// Resolve one clean commentary for the verse.
    ///
    /// A preferred source that exists wins even when all of its variants are
    /// empty; its text is then `None`. A preferred source with no row falls
    /// back to the smallest source_key. `None` when the verse has no
    /// commentary at all.
    pub async fn resolve_clean(
        &self,
        verse_id: &str,
        preferred: Option<&SourceKey>,
    ) -> Result<Option<CleanCommentary>, DbError> {
        if let Some(source) = preferred {
            let row = self.by_source(verse_id, source.as_str()).await?;
            if let Some(row) = row {
                return Ok(Some(row.into_clean()));
            }
            tracing::debug!(verse_id, source = source.as_str(), "preferred source missing, falling back");
        }

        Ok(self.first(verse_id).await?.map(Commentary::into_clean))
    }

    async fn by_source(&self, verse_id: &str, source_key: &str) -> Result<Option<Commentary>, DbError> {
        self.db
            .fetch_one(
                "commentaries.by_source",
                sqlx::query_as(
                    r#"
                    SELECT source_key, author, et, ht, ec, hc, sc
                    FROM commentaries
                    WHERE verse_id = $1 AND source_key = $2
                    "#,
                )
                .bind(verse_id)
                .bind(source_key),
            )
            .await
    }

    async fn first(&self, verse_id: &str) -> Result<Option<Commentary>, DbError> {
        self.db
            .fetch_one(
                "commentaries.first",
                sqlx::query_as(
                    r#"
                    SELECT source_key, author, et, ht, ec, hc, sc
                    FROM commentaries
                    WHERE verse_id = $1
                    ORDER BY source_key COLLATE "C"
                    LIMIT 1
                    "#,
                )
                .bind(verse_id),
            )
            .await
    }
}
