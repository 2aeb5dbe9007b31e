//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Reads go through [`QueryExecutor`](crate::db::QueryExecutor), one statement per borrowed connection
//! - Absent rows are `Ok(None)`, never an error
//! - The only write resolves conflicts with ON CONFLICT (no check-then-insert)

pub mod chapters;
pub mod verses;
pub mod commentaries;
pub mod preferences;

#[cfg(test)]
pub(crate) mod fixtures;

pub use chapters::ChapterRepo;
pub use verses::VerseRepo;
pub use commentaries::CommentaryRepo;
pub use preferences::PreferenceRepo;
