//! API error types and JSON response formatting.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::debug;

use crate::Error;

/// Message returned when a receipt ID is unknown.
pub const RECEIPT_NOT_FOUND: &str = "No receipt found for that ID";

/// API error response body: `{"error": "<message>"}`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// API error type that converts to HTTP responses.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
}

impl ApiError {
    /// Create a new API error.
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    /// Receipt not found error.
    pub fn receipt_not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "RECEIPT_NOT_FOUND", RECEIPT_NOT_FOUND)
    }

    /// Malformed or incomplete receipt payload.
    pub fn invalid_receipt(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "INVALID_RECEIPT", message)
    }

}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        debug!(
            status = %self.status.as_u16(),
            code = %self.code,
            message = %self.message,
            "error response"
        );

        let body = ErrorResponse {
            error: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self::invalid_receipt(err.to_string())
    }
}
