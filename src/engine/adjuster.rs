//! Limit adjuster: `+` / `-` nudges applied to the limit already entered.

use rust_decimal::Decimal;

use crate::models::Price;
use crate::models::price::{decimal_places, parse_decimal};

/// Nudge sizes, largest first: 10, 1, 0.1, 0.01, 0.001.
pub const NUDGES: [Decimal; 5] = [
    Decimal::from_parts(10, 0, 0, false, 0),
    Decimal::from_parts(1, 0, 0, false, 0),
    Decimal::from_parts(1, 0, 0, false, 1),
    Decimal::from_parts(1, 0, 0, false, 2),
    Decimal::from_parts(1, 0, 0, false, 3),
];

/// Adds `delta` to the limit text.
///
/// Unparsable text counts as zero and the result never goes below zero.
/// The precision is the larger of the text's and the nudge's.
pub fn adjust(current: &str, delta: Decimal) -> Price {
    let value = parse_decimal(current).unwrap_or(Decimal::ZERO);
    let decimals = decimal_places(current).max(delta.normalize().scale());
    let adjusted = (value + delta).max(Decimal::ZERO);
    Price::new(adjusted, decimals)
}
