//! userctl-server: HTTP CRUD API over the `users` table
//!
//! Each request maps to a single parameterized SQL statement executed on a
//! pooled PostgreSQL connection. Results and failures are translated back
//! into HTTP responses by the `http` layer.

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_pool, UserRepo, UserStore};
pub use http::{build_router, run_server, AppState, ServerConfig};
