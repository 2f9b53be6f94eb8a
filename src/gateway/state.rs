use std::sync::Arc;

use crate::db::Database;
use crate::transfer::TransferCoordinator;

/// Shared gateway state
///
/// The pool handle and the coordinator are constructed once at startup and
/// passed down explicitly; no global singletons.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub coordinator: Arc<TransferCoordinator>,
}

impl AppState {
    pub fn new(db: Arc<Database>, coordinator: Arc<TransferCoordinator>) -> Self {
        Self { db, coordinator }
    }
}
