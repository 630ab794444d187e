//! Error types for receipt validation.

use thiserror::Error;

/// Reasons a receipt is rejected before it reaches the store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Receipt must contain at least one item")]
    NoItems,
}
