//! OpenAPI / Swagger UI documentation
//!
//! - Swagger UI: `http://localhost:8088/docs`
//! - OpenAPI JSON: `http://localhost:8088/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::account::models::{Account, User};
use crate::gateway::handlers::{
    CreateAccountRequest, CreateUserRequest, HealthResponse, TransferRequest, TransferResponse,
    UpdateAccountRequest, UpdateUserRequest,
};

/// Main API documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Account Transfer API",
        version = "1.0.0",
        description = "Ledger of user-owned accounts with atomic, row-locked balance transfers.",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8088", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health::health_check,
        crate::gateway::handlers::account::get_account,
        crate::gateway::handlers::account::list_accounts,
        crate::gateway::handlers::account::create_account,
        crate::gateway::handlers::account::update_account,
        crate::gateway::handlers::account::delete_account,
        crate::gateway::handlers::user::get_user,
        crate::gateway::handlers::user::list_users,
        crate::gateway::handlers::user::create_user,
        crate::gateway::handlers::user::update_user,
        crate::gateway::handlers::user::delete_user,
        crate::gateway::handlers::transfer::create_transfer,
    ),
    components(schemas(
        Account,
        User,
        HealthResponse,
        CreateAccountRequest,
        UpdateAccountRequest,
        CreateUserRequest,
        UpdateUserRequest,
        TransferRequest,
        TransferResponse,
    )),
    tags(
        (name = "System", description = "Health and diagnostics"),
        (name = "Account", description = "Account CRUD"),
        (name = "User", description = "User CRUD"),
        (name = "Transfer", description = "Atomic balance transfers"),
    )
)]
pub struct ApiDoc;
