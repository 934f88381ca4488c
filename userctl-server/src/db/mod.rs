//! Database layer - connection pool, store seam and repository
//!
//! # Design Principles
//!
//! - One parameterized statement per operation
//! - Connections come from the pool per statement, never held across requests
//! - No explicit transactions; isolation is left to PostgreSQL
//! - Affected-row counts decide between success and not-found

pub mod pool;
pub mod repos;
pub mod store;

#[cfg(test)]
pub mod memory;

pub use pool::{create_pool, create_pool_with_options, DEFAULT_MAX_CONNECTIONS};
pub use repos::{DbError, UserRepo};
pub use store::UserStore;
