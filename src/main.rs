//! account-transfer - application entry point
//!
//! Wiring order: config -> logging -> pool -> schema -> gateway. Every
//! handle is constructed here and passed down explicitly.

use std::sync::Arc;
use std::time::Duration;

use account_transfer::config::AppConfig;
use account_transfer::db::Database;
use account_transfer::gateway::{self, state::AppState};
use account_transfer::logging;
use account_transfer::transfer::TransferCoordinator;

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let config = AppConfig::load(&env)?;
    let _guard = logging::init_logging(&config);

    tracing::info!(
        "account-transfer starting (env={}, build={})",
        env,
        env!("GIT_HASH")
    );

    let db = Arc::new(Database::connect(&config.database).await?);
    db.init_schema().await?;

    let coordinator = Arc::new(TransferCoordinator::new(
        db.clone(),
        Duration::from_millis(config.transfer.lock_timeout_ms),
    ));

    let state = Arc::new(AppState::new(db, coordinator));
    gateway::run_server(&config.gateway, state).await
}
