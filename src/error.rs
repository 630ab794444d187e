//! Unified error type for the receipt-processor library.
//!
//! This module provides a single [`Error`] type covering everything that can
//! go wrong before a receipt reaches the store. Scoring itself never fails.

use thiserror::Error;

use crate::receipt::ValidationError;

/// Unified error type for receipt-processor operations.
///
/// # Example
///
/// ```ignore
/// use receipt_processor::{Receipt, Result};
///
/// fn load(body: &[u8]) -> Result<Receipt> {
///     Receipt::from_json(body)
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The receipt is well-formed JSON but violates a required-field rule.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The payload is not valid JSON or does not match the receipt shape.
    #[error("Invalid receipt JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A [`Result`] type alias using the unified [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;
