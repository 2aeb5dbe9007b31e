//! Custom Axum extractors
//!
//! Path segments are parsed here so malformed ids become `validation_error`
//! JSON instead of axum's plain-text rejection.

use std::str::FromStr;

use axum::extract::rejection::QueryRejection;
use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use super::error::ApiError;
use crate::models::ValidationError;

fn parse_int<T: FromStr>(raw: &str, field: &'static str) -> Result<T, ApiError> {
    raw.parse().map_err(|_| {
        ApiError::Validation(ValidationError::InvalidFormat {
            field,
            reason: "must be an integer",
        })
    })
}

/// Map a malformed query string (e.g. a repeated parameter) to a 400.
///
/// Handlers take `Result<Query<T>, QueryRejection>` and pass the error here.
pub fn invalid_query(rejection: QueryRejection) -> ApiError {
    tracing::debug!(error = %rejection, "rejected query string");
    ApiError::Validation(ValidationError::InvalidFormat {
        field: "query",
        reason: "malformed query string",
    })
}

/// `{chapter_id}` path segment
pub struct ChapterId(pub i32);

impl<S> FromRequestParts<S> for ChapterId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation(ValidationError::Missing { field: "chapter_id" }))?;

        Ok(Self(parse_int(&raw, "chapter_id")?))
    }
}

/// `{chapter_id}/{verse_number}` path segments
#[derive(Debug, Clone, Copy)]
pub struct VersePath {
    pub chapter_id: i32,
    pub verse_number: i32,
}

impl VersePath {
    /// Human-readable position, e.g. `2.47`
    pub fn label(&self) -> String {
        format!("{}.{}", self.chapter_id, self.verse_number)
    }
}

impl<S> FromRequestParts<S> for VersePath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path((chapter, verse)): Path<(String, String)> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation(ValidationError::Missing { field: "verse path" }))?;

        Ok(Self {
            chapter_id: parse_int(&chapter, "chapter_id")?,
            verse_number: parse_int(&verse, "verse_number")?,
        })
    }
}

/// `{chat_id}` path segment
pub struct ChatId(pub i64);

impl<S> FromRequestParts<S> for ChatId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation(ValidationError::Missing { field: "chat_id" }))?;

        Ok(Self(parse_int(&raw, "chat_id")?))
    }
}
