use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use std::time::Instant;
use utoipa::ToSchema;

use crate::{AppState, ApiResponse};

/// Component health status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStatus {
    Healthy,
    Unhealthy,
}

/// Health check payload
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthReport {
    pub status: ComponentStatus,
    pub database: ComponentStatus,
    pub version: String,
    pub timestamp: String,
    pub latency_ms: u64,
}

/// Pings the database and reports overall health
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = crate::openapi::HealthEnvelope),
        (status = 503, description = "Database unreachable", body = crate::openapi::HealthEnvelope)
    ),
    tag = "health"
)]
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let start = Instant::now();
    let database = match crate::db::check_connection(&state.db).await {
        Ok(()) => ComponentStatus::Healthy,
        Err(_) => ComponentStatus::Unhealthy,
    };

    let report = HealthReport {
        status: database,
        database,
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        latency_ms: start.elapsed().as_millis() as u64,
    };

    if database == ComponentStatus::Healthy {
        (
            StatusCode::OK,
            Json(ApiResponse::success(report, "Service is healthy")),
        )
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ApiResponse {
                success: false,
                message: "Database unreachable".to_string(),
                data: Some(report),
            }),
        )
    }
}
