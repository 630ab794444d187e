//! Receipt service: ID generation, storage and scoring.

use crate::logging::{info, warn};
use crate::points::{self, PointsBreakdown};
use crate::receipt::{Receipt, ReceiptId};
use crate::store::ReceiptStore;

/// Orchestrates the [`ReceiptStore`] and the point rules.
///
/// Points are recomputed on every lookup; stored receipts never change, so
/// the result for a given ID is always the same.
#[derive(Debug, Default)]
pub struct ReceiptService {
    store: ReceiptStore,
}

impl ReceiptService {
    /// Create a service backed by an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a receipt under a freshly generated ID and return the ID.
    ///
    /// The receipt is expected to have passed [`Receipt::validate`].
    pub fn process(&self, receipt: Receipt) -> ReceiptId {
        let id = ReceiptId::generate();
        info!(id = %id, retailer = %receipt.retailer, "processing receipt");
        self.store.put(&id, receipt);
        id
    }

    /// Points awarded for the receipt stored under `id`, or `None` if no
    /// such receipt exists.
    pub fn points(&self, id: &str) -> Option<u64> {
        self.breakdown(id).map(|b| b.total())
    }

    /// Per-rule contributions for the receipt stored under `id`.
    pub fn breakdown(&self, id: &str) -> Option<PointsBreakdown> {
        let Some(receipt) = self.store.get(id) else {
            warn!(id = id, "receipt not found");
            return None;
        };

        let breakdown = points::breakdown(&receipt);
        info!(id = id, points = breakdown.total(), "points calculated");
        Some(breakdown)
    }

    /// Number of receipts processed so far.
    pub fn receipt_count(&self) -> usize {
        self.store.len()
    }
}
