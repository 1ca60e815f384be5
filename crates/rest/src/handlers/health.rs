//! Health check endpoint handler.
//!
//! Provides a simple health check endpoint for monitoring and load balancers.

use advocate_persistence::core::RecordStorage;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{debug, warn};

use crate::state::AppState;

/// Handler for the health check endpoint.
///
/// Runs the backend's own health check, which for SQLite checks out a pooled
/// connection and runs a trivial query.
///
/// # HTTP Request
///
/// `GET /health`
///
/// # Response
///
/// - `200 OK` - Server and storage are healthy
/// - `503 Service Unavailable` - The storage health check failed
pub async fn health_handler<S>(State(state): State<AppState<S>>) -> Response
where
    S: RecordStorage + 'static,
{
    debug!("Processing health check request");

    let backend_name = state.storage().name();
    let (status, label) = match state.storage().health_check().await {
        Ok(()) => (StatusCode::OK, "healthy"),
        Err(e) => {
            warn!(backend = backend_name, error = %e, "Health check failed");
            (StatusCode::SERVICE_UNAVAILABLE, "unhealthy")
        }
    };

    let health_response = serde_json::json!({
        "status": label,
        "backend": backend_name,
        "timestamp": chrono::Utc::now().to_rfc3339()
    });

    (status, Json(health_response)).into_response()
}

/// Handler for a liveness probe. Does not touch storage.
///
/// # HTTP Request
///
/// `GET /_liveness`
pub async fn liveness_handler() -> impl IntoResponse {
    StatusCode::OK
}
