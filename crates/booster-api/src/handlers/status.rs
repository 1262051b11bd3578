//! Liveness and health check handlers.

use axum::Json;
use axum::extract::State;
use tracing::warn;

use crate::dto::response::{HealthResponse, StatusResponse};
use crate::state::AppState;

/// GET /v1/status
#[utoipa::path(
    get,
    path = "/v1/status",
    tag = "status",
    responses((status = 200, description = "The process is up", body = StatusResponse))
)]
pub async fn status() -> Json<StatusResponse> {
    Json(StatusResponse { status: true })
}

/// GET /v1/status/health
#[utoipa::path(
    get,
    path = "/v1/status/health",
    tag = "status",
    responses((status = 200, description = "Dependency reachability", body = HealthResponse))
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = booster_database::connection::health_check(&state.db_pool)
        .await
        .unwrap_or_else(|e| {
            warn!(error = %e, "Database health check failed");
            false
        });

    let storage = state.object_store.health_check().await.unwrap_or_else(|e| {
        warn!(
            provider = state.object_store.provider_type(),
            error = %e,
            "Object store health check failed"
        );
        false
    });

    Json(HealthResponse {
        status: database && storage,
        database,
        storage,
        version: state.instance.version.clone(),
    })
}
