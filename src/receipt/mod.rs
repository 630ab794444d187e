//! Receipt data model.
//!
//! A [`Receipt`] is created from client JSON, checked with
//! [`Receipt::validate`], and stored immutably under a generated [`ReceiptId`].

mod error;
mod types;

pub use error::ValidationError;
pub use types::{Item, Receipt, ReceiptId};
