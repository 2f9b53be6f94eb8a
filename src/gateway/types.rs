//! Gateway boundary types
//!
//! - [`ApiResponse<T>`]: unified response envelope
//! - [`ApiError`]: typed handler failure, converts into the envelope
//! - [`StrictDecimal`]: format-validated decimal at the serde layer

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;

use crate::transfer::TransferError;

// ============================================================================
// Unified API Response Format
// ============================================================================

/// Unified API response wrapper
///
/// All API responses follow this structure:
/// - code: 0 = success, non-zero = error code
/// - msg: short message description
/// - data: actual data (success) or null (error)
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response code: 0 for success, non-zero for errors
    #[schema(example = 0)]
    pub code: i32,
    /// Response message
    #[schema(example = "ok")]
    pub msg: String,
    /// Response data (only present when code == 0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create success response
    pub fn success(data: T) -> Self {
        Self {
            code: 0,
            msg: "ok".to_string(),
            data: Some(data),
        }
    }
}

/// Handler result alias: success envelope or typed error
pub type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError>;

/// Wrap data in a success envelope
pub fn ok<T>(data: T) -> ApiResult<T> {
    Ok(Json(ApiResponse::success(data)))
}

// ============================================================================
// API Error
// ============================================================================

/// Typed handler failure
///
/// Carries the HTTP status plus a stable error code string clients can
/// branch on without parsing messages.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: String,
    pub msg: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            status,
            code: code.into(),
            msg: msg.into(),
        }
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "INVALID_PARAMETER", msg)
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "NOT_FOUND", msg)
    }

    pub fn db_error(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR", msg)
    }

    pub fn service_unavailable(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, "SERVICE_UNAVAILABLE", msg)
    }

    /// Convenience for early returns in handlers
    pub fn into_err<T>(self) -> ApiResult<T> {
        Err(self)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ApiResponse::<()> {
            code: i32::from(self.status.as_u16()),
            msg: format!("{}: {}", self.code, self.msg),
            data: None,
        });
        (self.status, body).into_response()
    }
}

impl From<TransferError> for ApiError {
    fn from(e: TransferError) -> Self {
        let status =
            StatusCode::from_u16(e.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        Self::new(status, e.code(), e.to_string())
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        Self::db_error(e.to_string())
    }
}

// ============================================================================
// StrictDecimal: Format-Validated Decimal at Serde Layer
// ============================================================================

/// Strict format Decimal - validates format during deserialization
///
/// - Rejects `.5` (must be `0.5`)
/// - Rejects `5.` (must be `5.0` or `5`)
/// - Rejects negative numbers
/// - Rejects empty strings
/// - Rejects scientific notation
///
/// Business validation (positivity, balance checks) happens later in the
/// transfer engine.
#[derive(Debug, Clone, Copy)]
pub struct StrictDecimal(Decimal);

impl StrictDecimal {
    /// Get the inner Decimal value
    pub fn inner(self) -> Decimal {
        self.0
    }
}

impl<'de> Deserialize<'de> for StrictDecimal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        // Only accept JSON strings for strict format control
        // JSON numbers bypass our format validation, so we reject them
        let s = String::deserialize(deserializer)?;

        if s.is_empty() {
            return Err(D::Error::custom("Amount cannot be empty"));
        }
        if s.starts_with('.') {
            return Err(D::Error::custom("Invalid format: use 0.5 not .5"));
        }
        if s.ends_with('.') {
            return Err(D::Error::custom("Invalid format: use 5.0 not 5."));
        }

        // Reject scientific notation (1.5e8, 1E10, etc.)
        if s.contains('e') || s.contains('E') {
            return Err(D::Error::custom(
                "Invalid format: scientific notation not allowed",
            ));
        }

        // Reject + prefix (should be implicit)
        if s.starts_with('+') {
            return Err(D::Error::custom("Invalid format: + prefix not allowed"));
        }

        let d = Decimal::from_str(&s)
            .map_err(|e| D::Error::custom(format!("Invalid decimal: {}", e)))?;

        if d.is_sign_negative() {
            return Err(D::Error::custom("Amount cannot be negative"));
        }

        Ok(StrictDecimal(d))
    }
}

impl Serialize for StrictDecimal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // Serialize as string to preserve precision
        serializer.serialize_str(&self.0.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Wrapper {
        amount: StrictDecimal,
    }

    #[test]
    fn test_strict_decimal_accepts_valid() {
        let w: Wrapper = serde_json::from_str(r#"{"amount": "125.00"}"#).unwrap();
        assert_eq!(w.amount.inner(), Decimal::from_str("125.00").unwrap());

        let w: Wrapper = serde_json::from_str(r#"{"amount": "0.5"}"#).unwrap();
        assert_eq!(w.amount.inner(), Decimal::from_str("0.5").unwrap());
    }

    #[test]
    fn test_strict_decimal_preserves_high_precision() {
        // Strings never pass through f64, so every digit survives
        let w: Wrapper = serde_json::from_str(r#"{"amount": "1.000000000000000001"}"#).unwrap();
        assert_eq!(
            w.amount.inner(),
            Decimal::from_str("1.000000000000000001").unwrap()
        );
        assert_ne!(w.amount.inner(), Decimal::ONE);
    }

    #[test]
    fn test_strict_decimal_rejects_bad_format() {
        assert!(serde_json::from_str::<Wrapper>(r#"{"amount": ".5"}"#).is_err());
        assert!(serde_json::from_str::<Wrapper>(r#"{"amount": "5."}"#).is_err());
        assert!(serde_json::from_str::<Wrapper>(r#"{"amount": ""}"#).is_err());
        assert!(serde_json::from_str::<Wrapper>(r#"{"amount": "-1.0"}"#).is_err());
        assert!(serde_json::from_str::<Wrapper>(r#"{"amount": "5e2"}"#).is_err());
        assert!(serde_json::from_str::<Wrapper>(r#"{"amount": "1E10"}"#).is_err());
        assert!(serde_json::from_str::<Wrapper>(r#"{"amount": "+5"}"#).is_err());
    }

    #[test]
    fn test_strict_decimal_rejects_json_numbers() {
        // Bare numbers would be routed through f64 and lose precision
        assert!(serde_json::from_str::<Wrapper>(r#"{"amount": 0.5}"#).is_err());
        assert!(serde_json::from_str::<Wrapper>(r#"{"amount": 5e2}"#).is_err());
        assert!(serde_json::from_str::<Wrapper>(r#"{"amount": 1.000000000000000001}"#).is_err());
    }

    #[test]
    fn test_api_response_envelope() {
        let resp = ApiResponse::success(42);
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"code":0,"msg":"ok","data":42}"#);
    }

    #[test]
    fn test_transfer_error_conversion() {
        let err = ApiError::from(TransferError::InsufficientFunds);
        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.code, "INSUFFICIENT_FUNDS");

        let err = ApiError::from(TransferError::Timeout);
        assert_eq!(err.status, StatusCode::SERVICE_UNAVAILABLE);
    }
}
