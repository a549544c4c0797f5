//! Health check handlers

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    timestamp: i64,
}

/// Liveness of this service
pub async fn check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().timestamp(),
    })
}

#[derive(Debug, Serialize)]
pub struct ApiHealthResponse {
    pub status: &'static str,
    pub message: String,
}

/// Readiness of the prediction service; the UI gates the form on this
pub async fn prediction_api(State(state): State<AppState>) -> (StatusCode, Json<ApiHealthResponse>) {
    match state.client.health_check().await {
        Ok(health) if health.is_healthy() => (
            StatusCode::OK,
            Json(ApiHealthResponse {
                status: "healthy",
                message: health.display_message(),
            }),
        ),
        Ok(health) => {
            tracing::warn!("Prediction API unhealthy: {}", health.display_message());
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ApiHealthResponse {
                    status: "unhealthy",
                    message: format!("API status: {}", health.display_message()),
                }),
            )
        }
        Err(e) => {
            tracing::warn!("Prediction API health check failed: {}", e.details());
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ApiHealthResponse {
                    status: "unhealthy",
                    message: format!(
                        "Failed to connect to the API. Is the backend server running? (Details: {})",
                        e.details()
                    ),
                }),
            )
        }
    }
}
