//! Verse records

use serde::Serialize;
use sqlx::FromRow;

/// A single verse (sloka) of a chapter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Verse {
    /// Opaque identifier assigned by the import pipeline (e.g. `BG2.47`)
    pub id: String,
    pub chapter_id: i32,
    pub verse_number: i32,
    pub speaker: Option<String>,
    pub slok: Option<String>,
    pub transliteration: Option<String>,
}
