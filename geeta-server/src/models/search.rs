//! Verse search parameters

use super::ValidationError;

/// Minimum length of a search term, in characters
const MIN_QUERY_LEN: usize = 2;

/// Default number of results
const DEFAULT_LIMIT: i64 = 20;

/// Maximum number of results
const MAX_LIMIT: i64 = 100;

/// Validated search request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    term: String,
    limit: i64,
}

impl SearchQuery {
    /// Validate raw query parameters.
    ///
    /// - `q` is required, at least 2 characters (not trimmed)
    /// - `limit` defaults to 20, must be within 1..=100
    pub fn new(q: Option<&str>, limit: Option<i64>) -> Result<Self, ValidationError> {
        let term = q.ok_or(ValidationError::Missing { field: "q" })?;

        if term.chars().count() < MIN_QUERY_LEN {
            return Err(ValidationError::TooShort {
                field: "q",
                min: MIN_QUERY_LEN,
            });
        }

        let limit = limit.unwrap_or(DEFAULT_LIMIT);
        if !(1..=MAX_LIMIT).contains(&limit) {
            return Err(ValidationError::OutOfRange {
                field: "limit",
                min: 1,
                max: MAX_LIMIT,
            });
        }

        Ok(Self {
            term: term.to_owned(),
            limit,
        })
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    /// Case-insensitive substring pattern for `ILIKE`.
    ///
    /// The term is embedded verbatim, so `%` and `_` keep their wildcard
    /// meaning.
    pub fn pattern(&self) -> String {
        format!("%{}%", self.term)
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }
}
