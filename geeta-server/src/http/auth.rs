//! Shared-secret gate for every route except `/health`

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use super::error::ApiError;
use super::server::AppState;

/// Request header carrying the API key
pub const API_KEY_HEADER: &str = "x-api-key";

/// Allow iff a key was supplied and equals the configured one.
///
/// Plain equality, not constant-time.
pub fn authorize(configured: &str, supplied: Option<&str>) -> bool {
    supplied == Some(configured)
}

/// Middleware rejecting requests without the configured API key.
///
/// Runs before extractors and handlers, so a rejected request never
/// touches the database.
pub async fn require_api_key(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let supplied = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok());

    if !authorize(&state.api_key, supplied) {
        tracing::debug!(
            path = %request.uri().path(),
            key_present = supplied.is_some(),
            "rejected request"
        );
        return Err(ApiError::Unauthorized);
    }

    Ok(next.run(request).await)
}
