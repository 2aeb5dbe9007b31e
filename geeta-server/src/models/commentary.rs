//! Commentary records and the clean-text selection rules
//!
//! A commentary row carries up to five variant texts. `NULL` and `""` are
//! equivalent: both mean the variant is absent.

use serde::Serialize;
use sqlx::FromRow;

/// Variant columns of a commentary row, in coalesce priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// English translation
    Et,
    /// Hindi translation
    Ht,
    /// English commentary
    Ec,
    /// Hindi commentary
    Hc,
    /// Sanskrit commentary
    Sc,
}

impl Variant {
    /// Fixed priority used when resolving a clean text. Consumers depend on it.
    pub const PRIORITY: [Variant; 5] = [
        Variant::Et,
        Variant::Ht,
        Variant::Ec,
        Variant::Hc,
        Variant::Sc,
    ];
}

/// One commentary row for a verse
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Commentary {
    pub source_key: String,
    pub author: Option<String>,
    pub et: Option<String>,
    pub ht: Option<String>,
    pub ec: Option<String>,
    pub hc: Option<String>,
    pub sc: Option<String>,
}

impl Commentary {
    pub fn variant(&self, variant: Variant) -> Option<&str> {
        match variant {
            Variant::Et => self.et.as_deref(),
            Variant::Ht => self.ht.as_deref(),
            Variant::Ec => self.ec.as_deref(),
            Variant::Hc => self.hc.as_deref(),
            Variant::Sc => self.sc.as_deref(),
        }
    }

    /// True iff the variant is non-null and not the empty string.
    ///
    /// Whitespace is not trimmed: `" "` counts as content.
    pub fn has_content(&self, variant: Variant) -> bool {
        self.variant(variant).is_some_and(|s| !s.is_empty())
    }

    /// First non-empty variant in [`Variant::PRIORITY`] order.
    pub fn clean_text(&self) -> Option<&str> {
        Variant::PRIORITY
            .iter()
            .find_map(|v| self.variant(*v).filter(|s| !s.is_empty()))
    }

    pub fn availability(&self) -> SourceAvailability {
        SourceAvailability {
            source_key: self.source_key.clone(),
            author: self.author.clone(),
            has_et: self.has_content(Variant::Et),
            has_ht: self.has_content(Variant::Ht),
            has_ec: self.has_content(Variant::Ec),
            has_hc: self.has_content(Variant::Hc),
            has_sc: self.has_content(Variant::Sc),
        }
    }

    pub fn into_clean(self) -> CleanCommentary {
        let text = self.clean_text().map(str::to_owned);
        CleanCommentary {
            source_key: Some(self.source_key),
            author: self.author,
            text,
        }
    }
}

/// Which variants a source provides for a verse
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceAvailability {
    pub source_key: String,
    pub author: Option<String>,
    pub has_et: bool,
    pub has_ht: bool,
    pub has_ec: bool,
    pub has_hc: bool,
    pub has_sc: bool,
}

/// Per-source availability for a verse plus the default source
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceListing {
    /// Smallest source_key, or `None` when the verse has no commentary
    pub default_source: Option<String>,
    pub sources: Vec<SourceAvailability>,
}

impl SourceListing {
    /// Build from rows already ordered by `source_key` ascending.
    pub fn from_rows(rows: &[Commentary]) -> Self {
        Self {
            default_source: rows.first().map(|c| c.source_key.clone()),
            sources: rows.iter().map(Commentary::availability).collect(),
        }
    }
}

/// A single resolved commentary. Every field is `None` when nothing resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CleanCommentary {
    pub source_key: Option<String>,
    pub author: Option<String>,
    pub text: Option<String>,
}
