//! Data models for users and accounts
//!
//! Plain records, no ORM semantics: ownership and cascade behavior are
//! explicit repository calls, not annotations.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A ledger account
///
/// `account_id` is server-assigned and immutable. `number` is a display
/// number and is not guaranteed unique. `balance` is an exact decimal,
/// never a float.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Account {
    pub account_id: i64,
    /// Owning user, if any. The transfer engine does not need it.
    pub user_id: Option<i64>,
    pub number: String,
    #[schema(value_type = String, example = "500.00")]
    pub balance: Decimal,
    pub created_at: DateTime<Utc>,
}

/// An account owner
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub user_id: i64,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}
