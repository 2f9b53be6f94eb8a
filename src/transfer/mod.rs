//! Transfer engine
//!
//! Atomic, row-locked balance transfers between two accounts. The only
//! blocking points are row-lock acquisition and the commit itself; everything
//! else is validated up front.

pub mod coordinator;
pub mod error;

pub use coordinator::{TransferCoordinator, TransferOutcome};
pub use error::TransferError;
