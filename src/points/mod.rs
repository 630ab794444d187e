//! Point calculation rules.
//!
//! The rule engine is a pure function over a [`Receipt`]: every rule is
//! evaluated independently and the results are summed. A field that fails
//! to parse (a malformed total, price, date or time) makes only the rule
//! that reads it contribute zero; it never aborts the calculation.
//!
//! # Example
//!
//! ```ignore
//! use receipt_processor::points::calculate_points;
//!
//! let points = calculate_points(&receipt);
//! ```

mod breakdown;
mod rules;

pub use breakdown::PointsBreakdown;
pub use rules::{
    count_alphanumeric, is_afternoon_purchase, is_multiple_of_quarter, is_odd_day,
    is_round_dollar, item_description_points, item_pair_points,
};

use crate::receipt::Receipt;

/// Points for a total with no cents.
pub const ROUND_DOLLAR_POINTS: u64 = 50;
/// Points for a total that is a multiple of 0.25.
pub const QUARTER_MULTIPLE_POINTS: u64 = 25;
/// Points for every two items.
pub const ITEM_PAIR_POINTS: u64 = 5;
/// Points for an odd day of the month.
pub const ODD_DAY_POINTS: u64 = 6;
/// Points for a purchase between 14:00 and 15:00.
pub const AFTERNOON_POINTS: u64 = 10;

/// Evaluate every rule and return the per-rule contributions.
pub fn breakdown(receipt: &Receipt) -> PointsBreakdown {
    PointsBreakdown {
        retailer_name: count_alphanumeric(&receipt.retailer),
        round_dollar_total: award(is_round_dollar(&receipt.total), ROUND_DOLLAR_POINTS),
        quarter_multiple_total: award(
            is_multiple_of_quarter(&receipt.total),
            QUARTER_MULTIPLE_POINTS,
        ),
        item_pairs: item_pair_points(receipt.items.len()),
        item_descriptions: receipt
            .items
            .iter()
            .map(item_description_points)
            .fold(0, u64::saturating_add),
        odd_purchase_day: award(is_odd_day(&receipt.purchase_date), ODD_DAY_POINTS),
        afternoon_purchase: award(
            is_afternoon_purchase(&receipt.purchase_time),
            AFTERNOON_POINTS,
        ),
    }
}

/// Calculate the total points awarded for a receipt.
pub fn calculate_points(receipt: &Receipt) -> u64 {
    breakdown(receipt).total()
}

fn award(condition: bool, points: u64) -> u64 {
    if condition { points } else { 0 }
}
