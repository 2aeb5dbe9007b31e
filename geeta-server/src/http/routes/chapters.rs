//! Chapter endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::db::ChapterRepo;
use crate::http::error::ApiError;
use crate::http::extractors::ChapterId;
use crate::http::server::AppState;
use crate::models::{Chapter, ChapterSummary};

/// GET /chapters - every chapter, ordered by id
async fn list_chapters(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ChapterSummary>>, ApiError> {
    let chapters = ChapterRepo::new(&state.pool).list().await?;
    Ok(Json(chapters))
}

/// GET /chapter/{chapter_id} - full chapter record
async fn get_chapter(
    State(state): State<Arc<AppState>>,
    ChapterId(id): ChapterId,
) -> Result<Json<Chapter>, ApiError> {
    let chapter = ChapterRepo::new(&state.pool)
        .get(id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            resource: "chapter",
            id: id.to_string(),
        })?;

    Ok(Json(chapter))
}

/// Chapter routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/chapters", get(list_chapters))
        .route("/chapter/{chapter_id}", get(get_chapter))
}
