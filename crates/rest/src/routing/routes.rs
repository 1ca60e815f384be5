//! Route table.

use advocate_persistence::core::RecordStorage;
use advocate_persistence::types::NewAdvocate;
use axum::{
    Router,
    routing::{get, post},
};

use crate::handlers;
use crate::state::AppState;

/// Creates all API routes.
///
/// # Routes
///
/// - `GET /api/advocates` - Paged listing and search
/// - `POST /api/seed` - Insert one advocate
/// - `GET /health` - Health check including storage
/// - `GET /_liveness` - Liveness probe
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: RecordStorage<NewRecord = NewAdvocate> + 'static,
{
    Router::new()
        .route(
            "/api/advocates",
            get(handlers::list_advocates_handler::<S>),
        )
        .route("/api/seed", post(handlers::seed_handler::<S>))
        .route("/health", get(handlers::health_handler::<S>))
        .route("/_liveness", get(handlers::liveness_handler))
        .with_state(state)
}
