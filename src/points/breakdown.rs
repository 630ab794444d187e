//! Per-rule point contributions.

use serde::Serialize;

/// Points contributed by each rule for a single receipt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsBreakdown {
    /// One point per ASCII alphanumeric character in the retailer name.
    pub retailer_name: u64,
    /// Awarded when the total has no cents.
    pub round_dollar_total: u64,
    /// Awarded when the total is a multiple of 0.25.
    pub quarter_multiple_total: u64,
    /// Five points for every two items.
    pub item_pairs: u64,
    /// Sum of the per-item description rule.
    pub item_descriptions: u64,
    /// Awarded when the day of the purchase date is odd.
    pub odd_purchase_day: u64,
    /// Awarded for purchases from 14:00 up to and including 15:00.
    pub afternoon_purchase: u64,
}

impl PointsBreakdown {
    /// Sum of all contributions.
    pub fn total(&self) -> u64 {
        [
            self.retailer_name,
            self.round_dollar_total,
            self.quarter_multiple_total,
            self.item_pairs,
            self.item_descriptions,
            self.odd_purchase_day,
            self.afternoon_purchase,
        ]
        .into_iter()
        .fold(0, u64::saturating_add)
    }
}
