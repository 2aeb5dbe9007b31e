//! Route handlers organized by resource

pub mod health;
pub mod chapters;
pub mod verses;
pub mod search;
pub mod preferences;
