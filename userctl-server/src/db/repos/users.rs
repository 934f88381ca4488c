//! User repository
//!
//! - list: full scan, email included
//! - get: keyed lookup of id and name
//! - create: INSERT ... RETURNING id
//! - update/delete: keyed, success decided by affected rows

use async_trait::async_trait;
use sqlx::PgPool;

use crate::db::store::UserStore;
use crate::models::User;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

impl DbError {
    /// Diagnostic text of the underlying driver error.
    pub fn detail(&self) -> String {
        match self {
            Self::Sqlx(e) => e.to_string(),
        }
    }
}

/// PostgreSQL-backed user repository
#[derive(Debug, Clone)]
pub struct UserRepo {
    pool: PgPool,
}

impl UserRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for UserRepo {
    async fn list(&self) -> Result<Vec<User>, DbError> {
        let users = sqlx::query_as::<_, User>("SELECT id, name, email FROM users")
            .fetch_all(&self.pool)
            .await?;

        Ok(users)
    }

    async fn get(&self, id: i64) -> Result<Option<User>, DbError> {
        let user = sqlx::query_as::<_, User>("SELECT id, name FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    async fn create(&self, name: Option<&str>) -> Result<Option<i64>, DbError> {
        // No row back means nothing was inserted
        let id: Option<(i64,)> =
            sqlx::query_as("INSERT INTO users (name) VALUES ($1) RETURNING id")
                .bind(name)
                .fetch_optional(&self.pool)
                .await?;

        Ok(id.map(|(id,)| id))
    }

    async fn update(&self, id: i64, name: Option<&str>) -> Result<bool, DbError> {
        let result = sqlx::query("UPDATE users SET name = $1 WHERE id = $2")
            .bind(name)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
