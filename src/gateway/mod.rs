//! HTTP gateway
//!
//! Thin axum layer over the repositories and the transfer coordinator. All
//! responses use the unified envelope from [`types::ApiResponse`].

pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::GatewayConfig;
use state::AppState;

/// Start the HTTP gateway server
pub async fn run_server(config: &GatewayConfig, state: Arc<AppState>) -> anyhow::Result<()> {
    let api = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route(
            "/accounts",
            post(handlers::account::create_account).get(handlers::account::list_accounts),
        )
        .route(
            "/accounts/{account_id}",
            get(handlers::account::get_account)
                .put(handlers::account::update_account)
                .delete(handlers::account::delete_account),
        )
        .route(
            "/users",
            post(handlers::user::create_user).get(handlers::user::list_users),
        )
        .route(
            "/users/{user_id}",
            get(handlers::user::get_user)
                .put(handlers::user::update_user)
                .delete(handlers::user::delete_user),
        )
        .route("/transfer", post(handlers::transfer::create_transfer));

    let app = Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
        .nest("/api/v1", api)
        .with_state(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Gateway listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
