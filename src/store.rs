//! In-memory receipt store.
//!
//! Receipts live for the lifetime of the process. Writers take an exclusive
//! lock for the duration of a single map insert, so readers only ever see a
//! receipt that has been stored completely.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::logging::debug;
use crate::receipt::{Receipt, ReceiptId};

/// Thread-safe mapping from receipt ID to receipt.
#[derive(Debug, Default)]
pub struct ReceiptStore {
    receipts: RwLock<HashMap<String, Arc<Receipt>>>,
}

impl ReceiptStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `receipt` under `id`. An existing entry is replaced.
    pub fn put(&self, id: &ReceiptId, receipt: Receipt) {
        let mut receipts = self
            .receipts
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        receipts.insert(id.as_str().to_owned(), Arc::new(receipt));
        debug!(id = %id, count = receipts.len(), "receipt stored");
    }

    /// Look up a receipt by ID.
    pub fn get(&self, id: &str) -> Option<Arc<Receipt>> {
        self.receipts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }

    /// Number of stored receipts.
    pub fn len(&self) -> usize {
        self.receipts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
