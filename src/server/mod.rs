//! HTTP API server for receipt processing.
//!
//! This module exposes the receipt service over HTTP using axum:
//! `POST /receipts/process` stores a receipt and `GET /receipts/{id}/points`
//! scores it.

mod config;
mod error;
mod logging;
mod routes;
mod state;

pub use config::{Config, ConfigError, LogFormat, LoggingConfig, ServerConfig};
pub use error::{ApiError, RECEIPT_NOT_FOUND};
pub use logging::{LoggingError, init as init_logging};
pub use routes::router;
pub use state::AppState;
