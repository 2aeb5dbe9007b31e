//! Verse repository: lookup by position and free-text search

use sqlx::PgPool;

use crate::db::executor::{DbError, QueryExecutor};
use crate::models::{SearchQuery, Verse};

/// Verse repository
pub struct VerseRepo<'a> {
    db: QueryExecutor<'a>,
}

impl<'a> VerseRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self {
            db: QueryExecutor::new(pool),
        }
    }

    /// Verse at `verse_number` within `chapter_id`.
    pub async fn get(&self, chapter_id: i32, verse_number: i32) -> Result<Option<Verse>, DbError> {
        self.db
            .fetch_one(
                "verses.get",
                sqlx::query_as(
                    r#"
                    SELECT id, chapter_id, verse_number, speaker, slok, transliteration
                    FROM verses
                    WHERE chapter_id = $1 AND verse_number = $2
                    "#,
                )
                .bind(chapter_id)
                .bind(verse_number),
            )
            .await
    }

    /// Case-insensitive substring match on the text or transliteration.
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<Verse>, DbError> {
        let pattern = query.pattern();

        self.db
            .fetch_all(
                "verses.search",
                sqlx::query_as(
                    r#"
                    SELECT id, chapter_id, verse_number, speaker, slok, transliteration
                    FROM verses
                    WHERE slok ILIKE $1 OR transliteration ILIKE $1
                    ORDER BY chapter_id, verse_number
                    LIMIT $2
                    "#,
                )
                .bind(&pattern)
                .bind(query.limit()),
            )
            .await
    }
}
