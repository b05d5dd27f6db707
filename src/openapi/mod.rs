use serde::Serialize;
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers::health::HealthReport;
use crate::models::account::{AccountListResponse, AccountResponse};

/// Envelope carrying one account
#[derive(Serialize, ToSchema)]
pub struct AccountEnvelope {
    pub success: bool,
    #[schema(example = "Account fetched successfully")]
    pub message: String,
    pub data: Option<AccountResponse>,
}

/// Envelope carrying a page of accounts
#[derive(Serialize, ToSchema)]
pub struct AccountListEnvelope {
    pub success: bool,
    #[schema(example = "Accounts fetched successfully")]
    pub message: String,
    pub data: Option<AccountListResponse>,
}

/// Envelope without a payload
#[derive(Serialize, ToSchema)]
pub struct EmptyEnvelope {
    pub success: bool,
    #[schema(example = "Account deleted successfully")]
    pub message: String,
    #[schema(value_type = Option<Object>)]
    pub data: Option<()>,
}

/// Envelope returned for every failed request
#[derive(Serialize, ToSchema)]
pub struct ErrorEnvelope {
    #[schema(example = false)]
    pub success: bool,
    #[schema(example = "Account not found")]
    pub message: String,
    #[schema(value_type = Option<Object>)]
    pub data: Option<()>,
}

#[derive(Serialize, ToSchema)]
pub struct HealthEnvelope {
    pub success: bool,
    pub message: String,
    pub data: Option<HealthReport>,
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Chart of Accounts API",
        version = "1.0.0",
        description = r#"
# Chart of Accounts API

Manage the accounts of a general ledger.

## Envelope

Every response is wrapped as `{"success": bool, "message": string, "data": ...}`.
Failed requests carry `success: false` and `data: null`.

## Pagination

`GET /api/v1/accounts` accepts `page` (default 1) and `limit` (default 10).
Values that are not positive integers fall back to the defaults.

## Deletion

An account referenced by journal entry lines cannot be deleted.
        "#,
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development")
    ),
    tags(
        (name = "accounts", description = "Chart of accounts endpoints"),
        (name = "health", description = "Health check endpoints")
    ),
    paths(
        crate::handlers::accounts::list_accounts,
        crate::handlers::accounts::get_account,
        crate::handlers::accounts::create_account,
        crate::handlers::accounts::update_account,
        crate::handlers::accounts::delete_account,
        crate::handlers::health::health_check,
    ),
    components(
        schemas(
            crate::entities::AccountType,
            crate::models::account::AccountInput,
            AccountResponse,
            AccountListResponse,
            crate::handlers::common::Pagination,
            AccountEnvelope,
            AccountListEnvelope,
            EmptyEnvelope,
            ErrorEnvelope,
            HealthEnvelope,
            HealthReport,
            crate::handlers::health::ComponentStatus
        )
    )
)]
pub struct ApiDocV1;

pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDocV1::openapi())
        .config(utoipa_swagger_ui::Config::from("/api-docs/openapi.json").try_it_out_enabled(true))
}
