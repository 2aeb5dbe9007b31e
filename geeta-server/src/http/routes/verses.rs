//! Verse endpoints: full, source availability, and clean views
//!
//! All three 404 when the verse is absent, before any commentary query.

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::db::{CommentaryRepo, VerseRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{invalid_query, VersePath};
use crate::http::server::AppState;
use crate::models::{CleanCommentary, Commentary, SourceKey, SourceListing, Verse};

/// Verse with every commentary embedded
#[derive(Serialize)]
pub struct VerseResponse {
    #[serde(flatten)]
    pub verse: Verse,
    pub commentaries: Vec<Commentary>,
}

/// Verse identity plus per-source availability
#[derive(Serialize)]
pub struct VerseSourcesResponse {
    pub id: String,
    pub chapter_id: i32,
    pub verse_number: i32,
    #[serde(flatten)]
    pub listing: SourceListing,
}

/// Verse with one resolved commentary
#[derive(Serialize)]
pub struct CleanVerseResponse {
    #[serde(flatten)]
    pub verse: Verse,
    pub commentary: CleanCommentary,
}

/// Query parameters for the clean view
#[derive(Debug, Default, Deserialize)]
pub struct CleanParams {
    pub source: Option<String>,
}

async fn load_verse(pool: &PgPool, path: VersePath) -> Result<Verse, ApiError> {
    VerseRepo::new(pool)
        .get(path.chapter_id, path.verse_number)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            resource: "verse",
            id: path.label(),
        })
}

/// GET /verse/{chapter_id}/{verse_number}
async fn get_verse(
    State(state): State<Arc<AppState>>,
    path: VersePath,
) -> Result<Json<VerseResponse>, ApiError> {
    let verse = load_verse(&state.pool, path).await?;
    let commentaries = CommentaryRepo::new(&state.pool).list(&verse.id).await?;

    Ok(Json(VerseResponse {
        verse,
        commentaries,
    }))
}

/// GET /verse/{chapter_id}/{verse_number}/sources
async fn get_verse_sources(
    State(state): State<Arc<AppState>>,
    path: VersePath,
) -> Result<Json<VerseSourcesResponse>, ApiError> {
    let verse = load_verse(&state.pool, path).await?;
    let listing = CommentaryRepo::new(&state.pool).sources(&verse.id).await?;

    Ok(Json(VerseSourcesResponse {
        id: verse.id,
        chapter_id: verse.chapter_id,
        verse_number: verse.verse_number,
        listing,
    }))
}

/// GET /verse/{chapter_id}/{verse_number}/clean?source=...
async fn get_clean_verse(
    State(state): State<Arc<AppState>>,
    path: VersePath,
    params: Result<Query<CleanParams>, QueryRejection>,
) -> Result<Json<CleanVerseResponse>, ApiError> {
    let Query(params) = params.map_err(invalid_query)?;
    let preferred = params.source.as_deref().and_then(SourceKey::normalize);

    let verse = load_verse(&state.pool, path).await?;
    let commentary = CommentaryRepo::new(&state.pool)
        .resolve_clean(&verse.id, preferred.as_ref())
        .await?
        .unwrap_or_default();

    Ok(Json(CleanVerseResponse { verse, commentary }))
}

/// Verse routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/verse/{chapter_id}/{verse_number}", get(get_verse))
        .route("/verse/{chapter_id}/{verse_number}/sources", get(get_verse_sources))
        .route("/verse/{chapter_id}/{verse_number}/clean", get(get_clean_verse))
}
