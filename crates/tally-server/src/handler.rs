use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::response::Json;
use tally_types::Receipt;

use crate::dto::{HealthResponse, PointsResponse, ProcessResponse};
use crate::error::IntakeError;
use crate::service::IntakeService;

/// `POST /receipts/process`
///
/// The body is decoded as JSON whatever its declared content type.
pub async fn process_receipt(
    State(service): State<IntakeService>,
    body: Bytes,
) -> Result<Json<ProcessResponse>, IntakeError> {
    let receipt: Receipt = serde_json::from_slice(&body).map_err(|err| {
        tracing::debug!(error = %err, "undecodable receipt");
        IntakeError::Decode(err)
    })?;
    let id = service.process(receipt)?;
    Ok(Json(ProcessResponse { id }))
}

/// `GET /receipts/:id/points`
pub async fn get_points(
    State(service): State<IntakeService>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, IntakeError> {
    let points = service.points(&id)?;
    Ok(Json(PointsResponse { points }))
}

/// Health check handler.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}
