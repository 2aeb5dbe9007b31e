//! Chapter records
//!
//! Reference data written by the external import pipeline; read-only here.

use serde::Serialize;
use sqlx::FromRow;

/// Chapter as shown in the chapter list (no summaries)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct ChapterSummary {
    pub id: i32,
    pub name: Option<String>,
    pub translation: Option<String>,
    pub transliteration: Option<String>,
    pub verses_count: Option<i32>,
    pub meaning_en: Option<String>,
    pub meaning_hi: Option<String>,
}

/// Full chapter record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Chapter {
    pub id: i32,
    pub name: Option<String>,
    pub translation: Option<String>,
    pub transliteration: Option<String>,
    pub verses_count: Option<i32>,
    pub meaning_en: Option<String>,
    pub meaning_hi: Option<String>,
    pub summary_en: Option<String>,
    pub summary_hi: Option<String>,
}
