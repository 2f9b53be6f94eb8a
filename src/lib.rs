//! account-transfer - Ledger service with atomic balance transfers
//!
//! A PostgreSQL-backed ledger of user-owned accounts. The core is the
//! transfer engine: row-locked, transactional movement of funds between two
//! accounts, enforcing non-negative balances and conservation of the total.
//!
//! # Modules
//!
//! - [`config`] - Per-environment YAML configuration
//! - [`logging`] - Rolling-file tracing setup
//! - [`db`] - Connection pool and schema bootstrap
//! - [`account`] - Account/User records, repositories, balance invariant
//! - [`transfer`] - Transfer coordinator and typed errors
//! - [`gateway`] - HTTP API (axum)

pub mod account;
pub mod config;
pub mod db;
pub mod gateway;
pub mod logging;
pub mod transfer;

// Convenient re-exports at crate root
pub use account::{Account, AccountRepository, User, UserRepository, can_debit};
pub use config::AppConfig;
pub use db::Database;
pub use transfer::{TransferCoordinator, TransferError, TransferOutcome};
