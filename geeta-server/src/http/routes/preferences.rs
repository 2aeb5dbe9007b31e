//! Per-chat commentary source preference

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::PreferenceRepo;
use crate::http::error::ApiError;
use crate::http::extractors::ChatId;
use crate::http::server::AppState;
use crate::models::{PreferenceView, SourceKey, UserPreference, ValidationError};

/// Set preference request
#[derive(Debug, Deserialize)]
pub struct SetPreferenceRequest {
    pub source: String,
}

/// Stored preference response
#[derive(Debug, Serialize)]
pub struct PreferenceResponse {
    pub chat_id: i64,
    pub source: String,
    pub updated_at: String,
}

impl From<UserPreference> for PreferenceResponse {
    fn from(p: UserPreference) -> Self {
        Self {
            chat_id: p.chat_id,
            source: p.source,
            updated_at: p.updated_at.to_rfc3339(),
        }
    }
}

/// GET /users/{chat_id}/preference
async fn get_preference(
    State(state): State<Arc<AppState>>,
    ChatId(chat_id): ChatId,
) -> Result<Json<PreferenceView>, ApiError> {
    let stored = PreferenceRepo::new(&state.pool).get(chat_id).await?;
    Ok(Json(PreferenceView::new(chat_id, stored)))
}

/// PUT /users/{chat_id}/preference
async fn set_preference(
    State(state): State<Arc<AppState>>,
    ChatId(chat_id): ChatId,
    body: Result<Json<SetPreferenceRequest>, JsonRejection>,
) -> Result<Json<PreferenceResponse>, ApiError> {
    let Json(req) = body.map_err(|e| {
        tracing::debug!(error = %e, "rejected preference body");
        ValidationError::InvalidFormat {
            field: "body",
            reason: "expected a JSON object with a string `source`",
        }
    })?;

    let source = SourceKey::new(&req.source)?;
    let stored = PreferenceRepo::new(&state.pool).upsert(chat_id, &source).await?;

    Ok(Json(PreferenceResponse::from(stored)))
}

/// Preference routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(
        "/users/{chat_id}/preference",
        get(get_preference).put(set_preference),
    )
}
