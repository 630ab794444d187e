//! Receipt processing and loyalty point scoring.
//!
//! This library accepts purchase receipts, stores them in memory under a
//! generated identifier, and scores them with a fixed set of point rules.
//!
//! # Quick Start
//!
//! ```ignore
//! use receipt_processor::prelude::*;
//!
//! let service = ReceiptService::new();
//!
//! let receipt = Receipt::from_json(br#"{"retailer": "Target", ...}"#)?;
//! let id = service.process(receipt);
//! let points = service.points(id.as_str());
//! ```
//!
//! # Modules
//!
//! - [`receipt`] - Receipt data model and validation
//! - [`points`] - The point rules (pure, no I/O)
//! - [`store`] - Thread-safe in-memory receipt store
//! - [`service`] - ID generation, storage and scoring
//! - [`server`] - HTTP API (requires `server` feature)
//!
//! # Feature Flags
//!
//! - `logging` - Enable library-level tracing (consumers provide their own subscriber)
//! - `cli` - Enable the command-line interface binary
//! - `server` - Enable the HTTP API server (enabled by default)
//! - `full` - Enable all features

mod logging;
pub mod points;
pub mod prelude;
pub mod receipt;
#[cfg(feature = "server")]
pub mod server;
pub mod service;
pub mod store;

mod error;

// Re-export the unified error type
pub use error::{Error, Result};

pub use points::{PointsBreakdown, breakdown, calculate_points};
pub use receipt::{Item, Receipt, ReceiptId, ValidationError};
pub use service::ReceiptService;
pub use store::ReceiptStore;
