//! HTTP handlers

pub mod account;
pub mod health;
pub mod transfer;
pub mod user;

// Re-exports for OpenAPI schema registration
pub use account::{CreateAccountRequest, UpdateAccountRequest};
pub use health::HealthResponse;
pub use transfer::{TransferRequest, TransferResponse};
pub use user::{CreateUserRequest, UpdateUserRequest};
