//! Database layer - connection pool, query executor and repositories
//!
//! # Design Principles
//!
//! - Connection pool (1..=10 connections) - no Arc<Mutex<Connection>>
//! - Missing tables surface as `SchemaNotReady`, everything else as `QueryFailed`
//! - Rely on DB constraints, handle conflicts - no check-then-insert
//! - Only `user_preferences` is created by this service

pub mod pool;
pub mod executor;
pub mod schema;
pub mod repos;

pub use pool::{close_pool, create_pool, create_pool_with_options, PoolSettings};
pub use executor::{DbError, QueryExecutor};
pub use schema::{ensure_preference_schema, table_status, TableStatus};
pub use repos::*;
