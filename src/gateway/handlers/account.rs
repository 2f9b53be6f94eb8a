//! Account CRUD handlers
//!
//! Plain single-row operations; no cross-row invariants here. Balance moves
//! between accounts go through the transfer endpoint only.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;

use super::super::state::AppState;
use super::super::types::{ApiError, ApiResult, StrictDecimal, ok};
use crate::account::models::Account;
use crate::account::repository::AccountRepository;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAccountRequest {
    /// Owning user, optional
    pub user_id: Option<i64>,
    /// Display number, not required to be unique
    pub number: String,
    /// Opening balance, defaults to zero
    #[schema(value_type = Option<String>, example = "500.00")]
    pub balance: Option<StrictDecimal>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateAccountRequest {
    pub number: String,
    #[schema(value_type = String, example = "100.00")]
    pub balance: StrictDecimal,
}

/// GET /api/v1/accounts/{account_id}
#[utoipa::path(
    get,
    path = "/api/v1/accounts/{account_id}",
    params(("account_id" = i64, Path, description = "Account id")),
    responses(
        (status = 200, description = "Account found", body = Account),
        (status = 404, description = "Account not found")
    ),
    tag = "Account"
)]
pub async fn get_account(
    State(state): State<Arc<AppState>>,
    Path(account_id): Path<i64>,
) -> ApiResult<Account> {
    let account = AccountRepository::get_by_id(state.db.pool(), account_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Account {} not found", account_id)))?;

    ok(account)
}

/// GET /api/v1/accounts
#[utoipa::path(
    get,
    path = "/api/v1/accounts",
    responses((status = 200, description = "All accounts", body = [Account])),
    tag = "Account"
)]
pub async fn list_accounts(State(state): State<Arc<AppState>>) -> ApiResult<Vec<Account>> {
    let accounts = AccountRepository::list_all(state.db.pool()).await?;
    ok(accounts)
}

/// POST /api/v1/accounts
#[utoipa::path(
    post,
    path = "/api/v1/accounts",
    request_body = CreateAccountRequest,
    responses(
        (status = 200, description = "Account created", body = Account),
        (status = 400, description = "Invalid parameters")
    ),
    tag = "Account"
)]
pub async fn create_account(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateAccountRequest>,
) -> ApiResult<Account> {
    if req.number.is_empty() {
        return ApiError::bad_request("Account number cannot be empty").into_err();
    }

    let balance = req.balance.map(StrictDecimal::inner).unwrap_or(Decimal::ZERO);
    tracing::info!(number = %req.number, "Creating account");

    let account =
        AccountRepository::create(state.db.pool(), req.user_id, &req.number, balance).await?;
    ok(account)
}

/// PUT /api/v1/accounts/{account_id}
#[utoipa::path(
    put,
    path = "/api/v1/accounts/{account_id}",
    params(("account_id" = i64, Path, description = "Account id")),
    request_body = UpdateAccountRequest,
    responses(
        (status = 200, description = "Account updated", body = Account),
        (status = 404, description = "Account not found")
    ),
    tag = "Account"
)]
pub async fn update_account(
    State(state): State<Arc<AppState>>,
    Path(account_id): Path<i64>,
    Json(req): Json<UpdateAccountRequest>,
) -> ApiResult<Account> {
    let updated = AccountRepository::update(
        state.db.pool(),
        account_id,
        &req.number,
        req.balance.inner(),
    )
    .await?;

    if !updated {
        return ApiError::not_found(format!("Account {} not found", account_id)).into_err();
    }

    let account = AccountRepository::get_by_id(state.db.pool(), account_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Account {} not found", account_id)))?;

    ok(account)
}

/// DELETE /api/v1/accounts/{account_id}
#[utoipa::path(
    delete,
    path = "/api/v1/accounts/{account_id}",
    params(("account_id" = i64, Path, description = "Account id")),
    responses(
        (status = 200, description = "Account deleted"),
        (status = 404, description = "Account not found")
    ),
    tag = "Account"
)]
pub async fn delete_account(
    State(state): State<Arc<AppState>>,
    Path(account_id): Path<i64>,
) -> ApiResult<()> {
    let deleted = AccountRepository::delete(state.db.pool(), account_id).await?;

    if !deleted {
        return ApiError::not_found(format!("Account {} not found", account_id)).into_err();
    }

    ok(())
}
