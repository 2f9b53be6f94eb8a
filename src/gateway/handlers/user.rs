//! User CRUD handlers

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use utoipa::ToSchema;

use super::super::state::AppState;
use super::super::types::{ApiError, ApiResult, ok};
use crate::account::models::User;
use crate::account::repository::UserRepository;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// GET /api/v1/users/{user_id}
#[utoipa::path(
    get,
    path = "/api/v1/users/{user_id}",
    params(("user_id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "User not found")
    ),
    tag = "User"
)]
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
) -> ApiResult<User> {
    let user = UserRepository::get_by_id(state.db.pool(), user_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("User {} not found", user_id)))?;

    ok(user)
}

/// GET /api/v1/users
#[utoipa::path(
    get,
    path = "/api/v1/users",
    responses((status = 200, description = "All users", body = [User])),
    tag = "User"
)]
pub async fn list_users(State(state): State<Arc<AppState>>) -> ApiResult<Vec<User>> {
    let users = UserRepository::list_all(state.db.pool()).await?;
    ok(users)
}

/// POST /api/v1/users
#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User created", body = User),
        (status = 400, description = "Invalid parameters")
    ),
    tag = "User"
)]
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateUserRequest>,
) -> ApiResult<User> {
    if req.name.is_empty() {
        return ApiError::bad_request("User name cannot be empty").into_err();
    }

    tracing::info!(name = %req.name, "Creating user");

    let user = UserRepository::create(
        state.db.pool(),
        &req.name,
        req.phone.as_deref(),
        req.email.as_deref(),
    )
    .await?;

    ok(user)
}

/// PUT /api/v1/users/{user_id}
#[utoipa::path(
    put,
    path = "/api/v1/users/{user_id}",
    params(("user_id" = i64, Path, description = "User id")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 404, description = "User not found")
    ),
    tag = "User"
)]
pub async fn update_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
    Json(req): Json<UpdateUserRequest>,
) -> ApiResult<User> {
    let updated = UserRepository::update(
        state.db.pool(),
        user_id,
        &req.name,
        req.phone.as_deref(),
        req.email.as_deref(),
    )
    .await?;

    if !updated {
        return ApiError::not_found(format!("User {} not found", user_id)).into_err();
    }

    let user = UserRepository::get_by_id(state.db.pool(), user_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("User {} not found", user_id)))?;

    ok(user)
}

/// DELETE /api/v1/users/{user_id}
///
/// Deletes the user and every account it owns, in one transaction.
#[utoipa::path(
    delete,
    path = "/api/v1/users/{user_id}",
    params(("user_id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "User and owned accounts deleted"),
        (status = 404, description = "User not found")
    ),
    tag = "User"
)]
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
) -> ApiResult<()> {
    let deleted = UserRepository::delete(state.db.pool(), user_id).await?;

    if !deleted {
        return ApiError::not_found(format!("User {} not found", user_id)).into_err();
    }

    ok(())
}
