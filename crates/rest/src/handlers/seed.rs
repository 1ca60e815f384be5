//! Single-record insert handler.

use advocate_persistence::core::RecordStorage;
use advocate_persistence::types::NewAdvocate;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{RestError, RestResult};
use crate::state::AppState;

/// Body of `POST /api/seed`.
#[derive(Debug, Clone, Serialize)]
pub struct SeedResponse<T> {
    /// The inserted records as stored.
    pub advocates: Vec<T>,
}

/// Handler for inserting one advocate.
///
/// The body is validated against the directory's field rules before it
/// reaches storage. The stored record, including its assigned `id` and
/// `createdAt`, is returned.
///
/// # HTTP Request
///
/// `POST /api/seed`
///
/// # Response
///
/// - `200 OK` - `{"advocates": [advocate]}`
/// - `400 Bad Request` - Malformed JSON, or field validation failed
/// - `500 Internal Server Error` - The storage engine failed
pub async fn seed_handler<S>(
    State(state): State<AppState<S>>,
    body: Result<Json<NewAdvocate>, JsonRejection>,
) -> RestResult<Json<SeedResponse<S::Record>>>
where
    S: RecordStorage<NewRecord = NewAdvocate> + 'static,
{
    let Json(record) = body.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "Rejected seed body");
        RestError::BadRequest {
            message: format!("Invalid request body: {}", rejection.body_text()),
        }
    })?;

    if let Err(err) = state.validator().validate(&record) {
        warn!(
            violations = err.details().len(),
            "Seed record failed validation"
        );
        return Err(err.into());
    }

    debug!(
        first_name = %record.first_name,
        last_name = %record.last_name,
        "Inserting advocate"
    );

    let advocates = state.repository().bulk_insert(vec![record]).await?;
    Ok(Json(SeedResponse { advocates }))
}
