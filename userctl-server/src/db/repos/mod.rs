//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - One statement per call, bound parameters only
//! - `RETURNING` for generated keys instead of a follow-up query
//! - `rows_affected()` to tell a hit from a miss on keyed writes

pub mod users;

pub use users::{DbError, UserRepo};
