//! Transfer error types
//!
//! One variant per failure kind, so callers can branch on the kind instead
//! of parsing messages. "Your request was unsatisfiable" kinds map to 4xx,
//! "the system could not complete it" kinds map to 5xx.

use thiserror::Error;

/// Transfer failure kinds
#[derive(Error, Debug)]
pub enum TransferError {
    // === Caller errors (rejected before any storage access) ===
    #[error("Amount must be greater than zero")]
    InvalidAmount,

    #[error("Source and destination account cannot be the same")]
    SameAccount,

    // === Unsatisfiable requests (no mutation occurred) ===
    #[error("Account not found: {0}")]
    AccountNotFound(i64),

    #[error("Insufficient funds")]
    InsufficientFunds,

    // === System errors (transaction rolled back) ===
    #[error("Transfer deadline exceeded")]
    Timeout,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl TransferError {
    /// Get the error code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            TransferError::InvalidAmount => "INVALID_AMOUNT",
            TransferError::SameAccount => "SAME_ACCOUNT",
            TransferError::AccountNotFound(_) => "ACCOUNT_NOT_FOUND",
            TransferError::InsufficientFunds => "INSUFFICIENT_FUNDS",
            TransferError::Timeout => "TIMEOUT",
            TransferError::Database(_) => "DATABASE_ERROR",
        }
    }

    /// Get HTTP status code suggestion
    pub fn http_status(&self) -> u16 {
        match self {
            TransferError::InvalidAmount | TransferError::SameAccount => 400,
            TransferError::AccountNotFound(_) => 404,
            TransferError::InsufficientFunds => 422,
            TransferError::Timeout => 503,
            TransferError::Database(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caller_errors_map_to_4xx() {
        assert_eq!(TransferError::InvalidAmount.http_status(), 400);
        assert_eq!(TransferError::SameAccount.http_status(), 400);
        assert_eq!(TransferError::AccountNotFound(7).http_status(), 404);
        assert_eq!(TransferError::InsufficientFunds.http_status(), 422);
    }

    #[test]
    fn test_system_errors_map_to_5xx() {
        assert_eq!(TransferError::Timeout.http_status(), 503);
        assert_eq!(
            TransferError::Database(sqlx::Error::PoolClosed).http_status(),
            500
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(TransferError::InsufficientFunds.code(), "INSUFFICIENT_FUNDS");
        assert_eq!(TransferError::AccountNotFound(1).code(), "ACCOUNT_NOT_FOUND");
        // Timeout must stay distinct from generic database failure
        assert_ne!(
            TransferError::Timeout.code(),
            TransferError::Database(sqlx::Error::PoolClosed).code()
        );
    }
}
