//! Receipt processing and scoring handlers.

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
};
use serde::Serialize;
use tracing::info;

use crate::points::PointsBreakdown;
use crate::receipt::Receipt;

use super::super::{error::ApiError, state::AppState};

/// Response for a processed receipt.
#[derive(Debug, Serialize)]
pub struct ProcessResponse {
    pub id: String,
}

/// Response for a points lookup.
#[derive(Debug, Serialize)]
pub struct PointsResponse {
    pub points: u64,
}

/// Per-rule breakdown with its total.
#[derive(Debug, Serialize)]
pub struct BreakdownResponse {
    #[serde(flatten)]
    pub rules: PointsBreakdown,
    pub total: u64,
}

/// Validate and store a receipt, returning its new ID.
///
/// The body is decoded as JSON whatever the declared content type.
pub async fn process_receipt(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ProcessResponse>, ApiError> {
    let receipt = Receipt::from_json(&body)?;
    let id = state.service().process(receipt);

    info!(id = %id, "receipt processed");

    Ok(Json(ProcessResponse { id: id.to_string() }))
}

/// Points awarded for a stored receipt.
pub async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, ApiError> {
    let points = state
        .service()
        .points(&id)
        .ok_or_else(ApiError::receipt_not_found)?;

    Ok(Json(PointsResponse { points }))
}

/// Rule-by-rule contributions for a stored receipt.
pub async fn get_breakdown(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BreakdownResponse>, ApiError> {
    let rules = state
        .service()
        .breakdown(&id)
        .ok_or_else(ApiError::receipt_not_found)?;

    Ok(Json(BreakdownResponse {
        total: rules.total(),
        rules,
    }))
}
