//! geeta-server: read-mostly HTTP API over scripture content
//!
//! Serves chapters, verses and multi-source commentaries from PostgreSQL,
//! plus a per-chat commentary source preference.

pub mod db;
pub mod http;
pub mod models;

pub use db::DbError;
pub use http::{run_server, ApiError, ServerConfig};
