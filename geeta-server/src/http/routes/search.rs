//! Free-text verse search

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::db::VerseRepo;
use crate::http::error::ApiError;
use crate::http::extractors::invalid_query;
use crate::http::server::AppState;
use crate::models::{SearchQuery, ValidationError, Verse};

/// Raw query parameters; `limit` is parsed by hand so bad input maps to our 400 body
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub limit: Option<String>,
}

impl SearchParams {
    pub fn validate(&self) -> Result<SearchQuery, ValidationError> {
        let limit = self
            .limit
            .as_deref()
            .map(|raw| {
                raw.parse::<i64>().map_err(|_| ValidationError::InvalidFormat {
                    field: "limit",
                    reason: "must be an integer",
                })
            })
            .transpose()?;

        SearchQuery::new(self.q.as_deref(), limit)
    }
}

/// GET /search?q=...&limit=...
async fn search_verses(
    State(state): State<Arc<AppState>>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<Verse>>, ApiError> {
    let Query(params) = params.map_err(invalid_query)?;
    let query = params.validate()?;
    let verses = VerseRepo::new(&state.pool).search(&query).await?;

    tracing::debug!(term = query.term(), hits = verses.len(), "verse search");
    Ok(Json(verses))
}

/// Search routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/search", get(search_verses))
}
