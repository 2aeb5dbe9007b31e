//! API error types with IntoResponse
//!
//! The single place where error kinds become HTTP statuses. Client-facing
//! messages are generic: no SQL, no driver text.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Missing or wrong API key (401)
    Unauthorized,

    /// Validation failed (400)
    Validation(ValidationError),

    /// Resource not found (404)
    NotFound { resource: &'static str, id: String },

    /// Imported tables not there yet (503)
    SchemaNotReady,

    /// Any other database failure (500, already logged)
    QueryFailed { kind: &'static str },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::SchemaNotReady => StatusCode::SERVICE_UNAVAILABLE,
            Self::QueryFailed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::Unauthorized => "unauthorized",
            Self::Validation(_) => "validation_error",
            Self::NotFound { .. } => "not_found",
            Self::SchemaNotReady => "schema_not_ready",
            Self::QueryFailed { .. } => "query_failed",
        }
    }

    fn message(&self) -> String {
        match self {
            Self::Unauthorized => "missing or invalid API key".to_string(),
            Self::Validation(e) => e.to_string(),
            Self::NotFound { resource, id } => format!("{} '{}' not found", resource, id),
            Self::SchemaNotReady => {
                "database schema not ready yet; wait for import/migration to finish".to_string()
            }
            Self::QueryFailed { kind } => format!("database query failed: {}", kind),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({
            "error": self.code(),
            "message": self.message()
        });

        (self.status(), Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::SchemaNotReady { .. } => Self::SchemaNotReady,
            DbError::QueryFailed { kind, .. } => Self::QueryFailed { kind },
        }
    }
}
