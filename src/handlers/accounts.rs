use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    response::Response,
    routing::get,
    Json, Router,
};
use tracing::debug;
use uuid::Uuid;

use crate::{
    errors::ServiceError,
    handlers::common::{
        acknowledged_response, created_response, success_response, PageRequest, Pagination,
        PaginationParams,
    },
    models::account::{AccountDraft, AccountInput, AccountListResponse, AccountResponse},
    AppState,
};

/// Routes mounted under `/accounts`
pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_accounts).post(create_account))
        .route(
            "/:id",
            get(get_account).put(update_account).delete(delete_account),
        )
}

// Ids that are not UUIDs cannot name a stored account.
fn parse_account_id(raw: &str) -> Result<Uuid, ServiceError> {
    Uuid::parse_str(raw).map_err(|_| ServiceError::account_not_found())
}

fn parse_body(payload: Result<Json<AccountInput>, JsonRejection>) -> Result<AccountDraft, ServiceError> {
    let Json(input) = payload.map_err(|rejection| {
        debug!(error = %rejection, "rejected account body");
        ServiceError::ValidationError(rejection.body_text())
    })?;
    Ok(input.into_draft()?)
}

/// List accounts, newest first
#[utoipa::path(
    get,
    path = "/api/v1/accounts",
    params(PaginationParams),
    responses(
        (status = 200, description = "Accounts fetched successfully", body = crate::openapi::AccountListEnvelope,
            headers(("X-Request-Id" = String, description = "Unique request id"))
        ),
        (status = 500, description = "Internal server error", body = crate::openapi::ErrorEnvelope)
    ),
    tag = "accounts"
)]
pub async fn list_accounts(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Response, ServiceError> {
    let params = query
        .map(|Query(pairs)| PaginationParams::from_pairs(pairs))
        .unwrap_or_default();
    let page = PageRequest::from_params(&params);

    let result = state.services.accounts.list_accounts(page).await?;
    let body = AccountListResponse {
        data: result.accounts.into_iter().map(AccountResponse::from).collect(),
        pagination: Pagination::new(result.total, page),
    };
    Ok(success_response(body, "Accounts fetched successfully"))
}

/// Fetch a single account
#[utoipa::path(
    get,
    path = "/api/v1/accounts/{id}",
    params(("id" = String, Path, description = "Account ID")),
    responses(
        (status = 200, description = "Account fetched successfully", body = crate::openapi::AccountEnvelope),
        (status = 404, description = "Account not found", body = crate::openapi::ErrorEnvelope),
        (status = 500, description = "Internal server error", body = crate::openapi::ErrorEnvelope)
    ),
    tag = "accounts"
)]
pub async fn get_account(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ServiceError> {
    let id = parse_account_id(&id)?;
    let account = state.services.accounts.get_account(id).await?;
    Ok(success_response(
        AccountResponse::from(account),
        "Account fetched successfully",
    ))
}

/// Create an account
#[utoipa::path(
    post,
    path = "/api/v1/accounts",
    request_body = AccountInput,
    responses(
        (status = 201, description = "Account created successfully", body = crate::openapi::AccountEnvelope),
        (status = 422, description = "Validation failed", body = crate::openapi::ErrorEnvelope),
        (status = 500, description = "Internal server error", body = crate::openapi::ErrorEnvelope)
    ),
    tag = "accounts"
)]
pub async fn create_account(
    State(state): State<AppState>,
    payload: Result<Json<AccountInput>, JsonRejection>,
) -> Result<Response, ServiceError> {
    let draft = parse_body(payload)?;
    let account = state.services.accounts.create_account(draft).await?;
    Ok(created_response(
        AccountResponse::from(account),
        "Account created successfully",
    ))
}

/// Replace an account's name and type
#[utoipa::path(
    put,
    path = "/api/v1/accounts/{id}",
    params(("id" = String, Path, description = "Account ID")),
    request_body = AccountInput,
    responses(
        (status = 200, description = "Account updated successfully", body = crate::openapi::AccountEnvelope),
        (status = 404, description = "Account not found", body = crate::openapi::ErrorEnvelope),
        (status = 422, description = "Validation failed", body = crate::openapi::ErrorEnvelope),
        (status = 500, description = "Internal server error", body = crate::openapi::ErrorEnvelope)
    ),
    tag = "accounts"
)]
pub async fn update_account(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<AccountInput>, JsonRejection>,
) -> Result<Response, ServiceError> {
    let id = parse_account_id(&id)?;
    let draft = parse_body(payload)?;
    let account = state.services.accounts.update_account(id, draft).await?;
    Ok(success_response(
        AccountResponse::from(account),
        "Account updated successfully",
    ))
}

/// Delete an account that no journal entry line references
#[utoipa::path(
    delete,
    path = "/api/v1/accounts/{id}",
    params(("id" = String, Path, description = "Account ID")),
    responses(
        (status = 200, description = "Account deleted successfully", body = crate::openapi::EmptyEnvelope),
        (status = 400, description = "Account still has journal entries", body = crate::openapi::ErrorEnvelope),
        (status = 404, description = "Account not found", body = crate::openapi::ErrorEnvelope),
        (status = 500, description = "Internal server error", body = crate::openapi::ErrorEnvelope)
    ),
    tag = "accounts"
)]
pub async fn delete_account(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ServiceError> {
    let id = parse_account_id(&id)?;
    state.services.accounts.delete_account(id).await?;
    Ok(acknowledged_response("Account deleted successfully"))
}
