//! Data types for the receipt module.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::ValidationError;

/// One purchased line on a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Free-form description, scored after trimming surrounding whitespace.
    pub short_description: String,

    /// Price as a decimal string (e.g. "6.49").
    pub price: String,
}

impl Item {
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}

/// A purchase receipt as submitted by a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Name of the retailer or store.
    pub retailer: String,

    /// Date of purchase, `YYYY-MM-DD`.
    pub purchase_date: String,

    /// Time of purchase, `HH:MM` in 24-hour format.
    pub purchase_time: String,

    /// Purchased items in receipt order.
    pub items: Vec<Item>,

    /// Total amount paid as a decimal string (e.g. "35.35").
    pub total: String,
}

impl Receipt {
    /// Decode a receipt from JSON and check its required fields.
    pub fn from_json(bytes: &[u8]) -> crate::Result<Self> {
        let receipt: Self = serde_json::from_slice(bytes)?;
        receipt.validate()?;
        Ok(receipt)
    }

    /// Check the required-field invariant.
    ///
    /// Every scalar field must be non-empty and at least one item must be
    /// present. Field contents are not parsed here: an unparseable total or
    /// date is accepted and simply scores zero for the affected rule.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required = [
            ("retailer", &self.retailer),
            ("purchaseDate", &self.purchase_date),
            ("purchaseTime", &self.purchase_time),
            ("total", &self.total),
        ];

        if let Some((name, _)) = required.into_iter().find(|(_, value)| value.is_empty()) {
            return Err(ValidationError::MissingField(name));
        }

        if self.items.is_empty() {
            return Err(ValidationError::NoItems);
        }

        Ok(())
    }
}

/// Opaque identifier assigned to a stored receipt.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(String);

impl ReceiptId {
    /// Generate a fresh random (UUID v4) identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ReceiptId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for ReceiptId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
