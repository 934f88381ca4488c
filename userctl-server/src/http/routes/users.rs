//! User endpoints
//!
//! One store call per handler; misses become 404, store failures become the
//! uniform 500 payload via `ApiError`.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{CreateUserRequest, CreatedUser, UpdateUserRequest, User};

pub const USER_UPDATED: &str = "User updated successfully";
pub const USER_DELETED: &str = "User deleted successfully";

/// GET /users - list every user
async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.users.list().await?;
    Ok(Json(users))
}

/// GET /users/{id} - get a single user
async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<User>, ApiError> {
    let user = state.users.get(id).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(user))
}

/// POST /users - create a user
async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<CreatedUser>), ApiError> {
    let id = state
        .users
        .create(req.name.as_deref())
        .await?
        .ok_or(ApiError::CreateFailed)?;

    tracing::debug!(id, "user created");
    Ok((StatusCode::CREATED, Json(CreatedUser::new(id))))
}

/// PUT /users/{id} - rename a user
async fn update_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<&'static str, ApiError> {
    if state.users.update(id, req.name.as_deref()).await? {
        Ok(USER_UPDATED)
    } else {
        Err(ApiError::NotFound)
    }
}

/// DELETE /users/{id} - delete a user
async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<&'static str, ApiError> {
    if state.users.delete(id).await? {
        Ok(USER_DELETED)
    } else {
        Err(ApiError::NotFound)
    }
}

/// User routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}
