use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::error::{DbErr, SqlErr};
use tracing::{debug, error, warn};

use crate::ApiResponse;

/// Message returned for every 5xx response; details stay in the logs.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error. Please try again later";

/// Message returned when a delete is blocked by referencing journal entry lines.
pub const ACCOUNT_IN_USE_MESSAGE: &str = "Cannot delete account with existing journal entries";

fn current_request_id() -> Option<String> {
    crate::tracing::current_request_id().map(|rid| rid.as_str().to_string())
}

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Database error: {0}")]
    DatabaseError(DbErr),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Referential integrity: {0}")]
    HasDependents(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

impl From<DbErr> for ServiceError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                debug!(detail = %detail, "unique constraint violated");
                ServiceError::Conflict("Resource already exists".to_string())
            }
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                debug!(detail = %detail, "foreign key constraint violated");
                ServiceError::HasDependents(ACCOUNT_IN_USE_MESSAGE.to_string())
            }
            _ => ServiceError::DatabaseError(err),
        }
    }
}

impl ServiceError {
    /// Converts errors raised by tower middleware (the request timeout) so
    /// they leave through the same envelope as handler errors.
    pub async fn from_middleware(err: axum::BoxError) -> Self {
        if err.is::<tower::timeout::error::Elapsed>() {
            ServiceError::Timeout
        } else {
            ServiceError::InternalError(err.to_string())
        }
    }

    /// Shorthand for the 404 raised when an account id matches no row.
    pub fn account_not_found() -> Self {
        ServiceError::NotFound("Account not found".to_string())
    }

    /// Returns the HTTP status code for this error.
    /// This is the single source of truth for error-to-status mapping.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::HasDependents(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Timeout => StatusCode::REQUEST_TIMEOUT,
            Self::DatabaseError(_) | Self::InternalError(_) | Self::Other(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Returns the error message suitable for HTTP responses.
    /// Internal errors return a generic message to avoid leaking implementation details.
    pub fn response_message(&self) -> String {
        match self {
            Self::NotFound(msg)
            | Self::ValidationError(msg)
            | Self::HasDependents(msg)
            | Self::Conflict(msg) => msg.clone(),
            Self::Timeout => "Request timed out".to_string(),
            Self::DatabaseError(_) | Self::InternalError(_) | Self::Other(_) => {
                INTERNAL_ERROR_MESSAGE.to_string()
            }
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let request_id = current_request_id().unwrap_or_default();

        if status.is_server_error() {
            error!(request_id = %request_id, error = %self, "request failed");
        } else if status == StatusCode::NOT_FOUND {
            debug!(request_id = %request_id, error = %self, "request rejected");
        } else {
            warn!(request_id = %request_id, error = %self, "request rejected");
        }

        let body = ApiResponse::<()>::error(self.response_message());
        (status, Json(body)).into_response()
    }
}
