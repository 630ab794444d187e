//! API routes and handlers.

mod receipts;

use axum::{Router, routing::get, routing::post};

use super::state::AppState;

/// Build the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/receipts/process", post(receipts::process_receipt))
        .route("/receipts/{id}/points", get(receipts::get_points))
        .route("/receipts/{id}/breakdown", get(receipts::get_breakdown))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}
