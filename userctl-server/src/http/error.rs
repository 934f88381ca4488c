//! API error types with IntoResponse
//!
//! Misses and insert failures are short plain-text bodies. Data-access
//! failures carry a JSON payload with the driver's diagnostic detail.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::repos::DbError;

pub const USER_NOT_FOUND: &str = "User not found";
pub const CREATE_FAILED: &str = "Failed to create user";
pub const DATABASE_ERROR: &str = "Database error occurred";

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Keyed lookup or write matched no row (404)
    NotFound,

    /// Insert produced no row or no generated id (500)
    CreateFailed,

    /// Database error (500, logged)
    Database(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound => (StatusCode::NOT_FOUND, USER_NOT_FOUND).into_response(),
            Self::CreateFailed => {
                tracing::error!("insert returned no generated id");
                (StatusCode::INTERNAL_SERVER_ERROR, CREATE_FAILED).into_response()
            }
            Self::Database(e) => {
                let detail = e.detail();
                tracing::error!(%detail, "Database error");
                let status = StatusCode::INTERNAL_SERVER_ERROR;
                let body = json!({
                    "status": status.as_u16(),
                    "message": DATABASE_ERROR,
                    "detail": detail
                });
                (status, Json(body)).into_response()
            }
        }
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        Self::Database(e)
    }
}
