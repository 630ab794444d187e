//! Convenient re-exports for common usage patterns.
//!
//! # Example
//!
//! ```ignore
//! use receipt_processor::prelude::*;
//!
//! let service = ReceiptService::new();
//! let id = service.process(receipt);
//! ```

// Unified error handling
pub use crate::error::{Error, Result};

// Data model
pub use crate::receipt::{Item, Receipt, ReceiptId, ValidationError};

// Scoring
pub use crate::points::{PointsBreakdown, breakdown, calculate_points};

// Storage and orchestration
pub use crate::service::ReceiptService;
pub use crate::store::ReceiptStore;
