//! Transfer handler

use std::sync::Arc;

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::super::state::AppState;
use super::super::types::{ApiResult, StrictDecimal, ok};

#[derive(Debug, Deserialize, ToSchema)]
pub struct TransferRequest {
    /// Source account id
    pub from: i64,
    /// Destination account id
    pub to: i64,
    /// Positive decimal amount; string to avoid float precision issues
    #[schema(value_type = String, example = "125.00")]
    pub amount: StrictDecimal,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TransferResponse {
    pub from: i64,
    pub to: i64,
    #[schema(example = "125.00")]
    pub amount: String,
    /// Source balance after commit
    pub source_balance: String,
    /// Destination balance after commit
    pub destination_balance: String,
    pub timestamp_ms: i64,
}

/// POST /api/v1/transfer
///
/// Atomically moves funds between two accounts. Not idempotent: submitting
/// the same request twice moves funds twice.
#[utoipa::path(
    post,
    path = "/api/v1/transfer",
    request_body = TransferRequest,
    responses(
        (status = 200, description = "Transfer committed", body = TransferResponse),
        (status = 400, description = "Invalid amount or same account"),
        (status = 404, description = "Source or destination account not found"),
        (status = 422, description = "Insufficient funds"),
        (status = 503, description = "Deadline exceeded")
    ),
    tag = "Transfer"
)]
pub async fn create_transfer(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TransferRequest>,
) -> ApiResult<TransferResponse> {
    let amount = req.amount.inner();
    tracing::info!(from = req.from, to = req.to, amount = %amount, "Transfer request");

    let outcome = state.coordinator.transfer(req.from, req.to, amount).await?;

    ok(TransferResponse {
        from: outcome.source.account_id,
        to: outcome.destination.account_id,
        amount: amount.to_string(),
        source_balance: outcome.source.balance.to_string(),
        destination_balance: outcome.destination.balance.to_string(),
        timestamp_ms: chrono::Utc::now().timestamp_millis(),
    })
}
