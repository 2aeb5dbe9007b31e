//! User source preference - validated at construction

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use super::ValidationError;

/// Maximum length of a submitted source, in characters
const MAX_SOURCE_LEN: usize = 64;

/// Normalized commentary source key: trimmed and lower-cased.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceKey(String);

impl SourceKey {
    /// Validate a source as submitted by a client.
    ///
    /// # Rules
    /// - Raw value 1..=64 characters
    /// - Not blank once trimmed
    ///
    /// # Example
    /// ```
    /// use geeta_server::models::SourceKey;
    ///
    /// assert_eq!(SourceKey::new("  Prabhu ").unwrap().as_str(), "prabhu");
    /// assert!(SourceKey::new("   ").is_err());
    /// ```
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: "source" });
        }

        if raw.chars().count() > MAX_SOURCE_LEN {
            return Err(ValidationError::TooLong {
                field: "source",
                max: MAX_SOURCE_LEN,
            });
        }

        Self::normalize(raw).ok_or(ValidationError::Empty { field: "source" })
    }

    /// Normalize without length checks; `None` if blank.
    ///
    /// Used for the optional `source` query parameter, where blank means
    /// "no preference".
    pub fn normalize(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            None
        } else {
            Some(Self(normalized))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SourceKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Stored preference row
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct UserPreference {
    pub chat_id: i64,
    pub source: String,
    pub updated_at: DateTime<Utc>,
}

/// Preference lookup result; `source` is `None` when nothing is stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreferenceView {
    pub chat_id: i64,
    pub source: Option<String>,
}

impl PreferenceView {
    pub fn new(chat_id: i64, stored: Option<UserPreference>) -> Self {
        Self {
            chat_id,
            source: stored.map(|p| p.source),
        }
    }
}
