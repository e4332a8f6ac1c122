//! Price and label formatting.

use rust_decimal::Decimal;

use crate::models::OffsetMode;
use crate::models::price::{format_german, parse_decimal};

pub use crate::models::price::decimal_places;

/// Minimum fraction digits shown by [`format_for_display`].
const DISPLAY_MIN_DECIMALS: u32 = 2;
/// Maximum fraction digits shown by [`format_for_display`].
const DISPLAY_MAX_DECIMALS: u32 = 5;

/// Renders price text in German notation with 2 to 5 fraction digits.
///
/// Text that is not a number is returned unchanged.
pub fn format_for_display(text: &str) -> String {
    match parse_decimal(text) {
        Some(value) => format_german(value, DISPLAY_MIN_DECIMALS, DISPLAY_MAX_DECIMALS),
        None => text.to_string(),
    }
}

/// Formats an amount as euros with 2 to 4 fraction digits, e.g. `1.234,5 €`
/// becomes `1.234,50 €`.
pub fn format_currency(value: Decimal) -> String {
    format!("{} €", format_german(value, 2, 4))
}

/// Renders a signed offset the way the button shows it: `+0,5%`, `-1%`,
/// `+0,05`.
pub fn offset_label(offset: Decimal, mode: OffsetMode) -> String {
    let sign = if offset.is_sign_negative() && !offset.is_zero() {
        "-"
    } else {
        "+"
    };
    let magnitude = offset.abs().to_string().replace('.', ",");
    match mode {
        OffsetMode::Percentage => format!("{sign}{magnitude}%"),
        OffsetMode::Fixed => format!("{sign}{magnitude}"),
    }
}

/// Splits a comma-decimal label into the part with at most two decimals and
/// the trailing digits that are rendered faint. A trailing `%` stays with
/// the faint part.
///
/// ```
/// use limitpad::engine::format::split_faint_decimals;
///
/// assert_eq!(split_faint_decimals("17,5505"), ("17,55", "05"));
/// assert_eq!(split_faint_decimals("+0,125%"), ("+0,12", "5%"));
/// assert_eq!(split_faint_decimals("101,00"), ("101,00", ""));
/// ```
pub fn split_faint_decimals(label: &str) -> (&str, &str) {
    let numeric = label.strip_suffix('%').unwrap_or(label);
    let Some(comma) = numeric.find(',') else {
        return (label, "");
    };
    let fraction_digits = numeric[comma + 1..].len();
    if fraction_digits <= 2 {
        return (label, "");
    }
    label.split_at(comma + 3)
}
