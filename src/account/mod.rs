//! Account management module
//!
//! PostgreSQL-based storage for users and their accounts.

pub mod models;
pub mod repository;
pub mod validation;

// Re-export commonly used types
pub use models::{Account, User};
pub use repository::{AccountRepository, UserRepository};
pub use validation::can_debit;

// Re-export Database from top-level db module
pub use crate::db::Database;
