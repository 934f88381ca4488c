//! Storage seam for the users resource
//!
//! Handlers talk to a `dyn UserStore` held in router state, so the
//! PostgreSQL repository can be swapped for an in-memory store in tests.

use async_trait::async_trait;

use crate::db::repos::DbError;
use crate::models::User;

/// Data access for the `users` table.
///
/// Keyed writes report whether a row was touched rather than failing, so
/// callers decide how "nothing matched" is surfaced.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// All rows in store scan order, with `email` populated.
    async fn list(&self) -> Result<Vec<User>, DbError>;

    /// Single row by id, without `email`.
    async fn get(&self, id: i64) -> Result<Option<User>, DbError>;

    /// Insert a row and return the generated id.
    ///
    /// `Ok(None)` means the insert touched no row or yielded no key.
    async fn create(&self, name: Option<&str>) -> Result<Option<i64>, DbError>;

    /// Set `name` on the row with `id`. Returns `true` if a row was updated.
    async fn update(&self, id: i64, name: Option<&str>) -> Result<bool, DbError>;

    /// Remove the row with `id`. Returns `true` if a row was deleted.
    async fn delete(&self, id: i64) -> Result<bool, DbError>;
}
