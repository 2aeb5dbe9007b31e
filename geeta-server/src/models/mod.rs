//! Domain models with validation at construction
//!
//! Reference records map one-to-one onto database rows.
//! User input is validated when creating the request types;
//! invalid input returns ValidationError, not panic.

pub mod validation;
pub mod chapter;
pub mod verse;
pub mod commentary;
pub mod preference;
pub mod search;

pub use validation::ValidationError;
pub use chapter::{Chapter, ChapterSummary};
pub use verse::Verse;
pub use commentary::{CleanCommentary, Commentary, SourceAvailability, SourceListing, Variant};
pub use preference::{PreferenceView, SourceKey, UserPreference};
pub use search::SearchQuery;
