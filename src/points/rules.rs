//! Individual point rules.
//!
//! Monetary amounts are parsed as exact base-10 decimals so that the
//! round-dollar and quarter checks never misfire on binary float error.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::receipt::Item;

use super::ITEM_PAIR_POINTS;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_SHAPE: &str = "9999-99-99";
const TIME_FORMAT: &str = "%H:%M";
const TIME_SHAPE: &str = "99:99";

/// Parse a decimal amount, accepting plain or scientific notation.
///
/// Digit separators are rejected, and so is any value that cannot be
/// represented without rounding.
fn parse_amount(value: &str) -> Option<Decimal> {
    if value.contains('_') {
        return None;
    }
    if value.contains(['e', 'E']) {
        Decimal::from_scientific(value).ok()
    } else {
        Decimal::from_str_exact(value).ok()
    }
}

/// `true` if `value` has exactly `shape`'s length, the same separators at
/// the same positions, and ASCII digits everywhere `shape` has `9`.
fn matches_shape(value: &str, shape: &str) -> bool {
    value.len() == shape.len()
        && value.bytes().zip(shape.bytes()).all(|(v, s)| match s {
            b'9' => v.is_ascii_digit(),
            sep => v == sep,
        })
}

/// Count the ASCII alphanumeric characters in `s`.
pub fn count_alphanumeric(s: &str) -> u64 {
    s.chars().filter(char::is_ascii_alphanumeric).count() as u64
}

/// `true` if `total` parses and has no fractional part.
pub fn is_round_dollar(total: &str) -> bool {
    parse_amount(total).is_some_and(|value| value.fract().is_zero())
}

/// `true` if `total` parses and is an exact multiple of 0.25.
pub fn is_multiple_of_quarter(total: &str) -> bool {
    let quarter = Decimal::new(25, 2);
    parse_amount(total).is_some_and(|value| (value % quarter).is_zero())
}

/// Five points for every complete pair of items.
pub fn item_pair_points(item_count: usize) -> u64 {
    (item_count / 2) as u64 * ITEM_PAIR_POINTS
}

/// Points for a single item.
///
/// If the trimmed description length is a multiple of three, the price is
/// multiplied by 0.2 and rounded up to the nearest integer. Unparseable and
/// negative prices contribute nothing.
pub fn item_description_points(item: &Item) -> u64 {
    if item.short_description.trim().len() % 3 != 0 {
        return 0;
    }

    let Some(price) = parse_amount(&item.price) else {
        return 0;
    };

    let points = (price * Decimal::new(2, 1)).ceil();
    if points.is_sign_negative() {
        return 0;
    }
    points.to_u64().unwrap_or(u64::MAX)
}

/// `true` if `date` parses as `YYYY-MM-DD` and its day of month is odd.
pub fn is_odd_day(date: &str) -> bool {
    matches_shape(date, DATE_SHAPE)
        && NaiveDate::parse_from_str(date, DATE_FORMAT).is_ok_and(|d| d.day() % 2 == 1)
}

/// `true` if `time` parses as `HH:MM` and falls within 14:00..=15:00.
pub fn is_afternoon_purchase(time: &str) -> bool {
    matches_shape(time, TIME_SHAPE)
        && NaiveTime::parse_from_str(time, TIME_FORMAT)
            .is_ok_and(|t| t.hour() == 14 || (t.hour() == 15 && t.minute() == 0))
}
