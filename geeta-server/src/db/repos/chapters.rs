//! Chapter repository

use sqlx::PgPool;

use crate::db::executor::{DbError, QueryExecutor};
use crate::models::{Chapter, ChapterSummary};

/// Chapter repository
pub struct ChapterRepo<'a> {
    db: QueryExecutor<'a>,
}

impl<'a> ChapterRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self {
            db: QueryExecutor::new(pool),
        }
    }

    /// All chapters ordered by id.
    pub async fn list(&self) -> Result<Vec<ChapterSummary>, DbError> {
        self.db
            .fetch_all(
                "chapters.list",
                sqlx::query_as(
                    r#"
                    SELECT id, name, translation, transliteration, verses_count,
                           meaning_en, meaning_hi
                    FROM chapters
                    ORDER BY id
                    "#,
                ),
            )
            .await
    }

    /// Full chapter record, `None` if no chapter has this id.
    pub async fn get(&self, id: i32) -> Result<Option<Chapter>, DbError> {
        self.db
            .fetch_one(
                "chapters.get",
                sqlx::query_as(
                    r#"
                    SELECT id, name, translation, transliteration, verses_count,
                           meaning_en, meaning_hi, summary_en, summary_hi
                    FROM chapters
                    WHERE id = $1
                    "#,
                )
                .bind(id),
            )
            .await
    }
}
