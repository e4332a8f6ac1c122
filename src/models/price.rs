//! Decimal prices with explicit display precision.
//!
//! Broker pages render prices with either a comma or a dot as decimal
//! separator (`17,550`, `24110.50`, `1.234,56 €`). [`Price::parse`] accepts
//! all of these; the last separator in the text is the decimal separator
//! and any earlier one is a thousands separator.

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::PriceError;

/// Precision reported for prices written without a decimal separator.
pub const DEFAULT_DECIMALS: u32 = 2;

/// A price value together with the number of digits shown after the
/// decimal separator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Price {
    value: Decimal,
    decimals: u32,
}

impl Price {
    /// Creates a price rounded half away from zero to `decimals` digits.
    ///
    /// The precision is capped at what a [`Decimal`] of this magnitude can
    /// hold, at most 28 digits.
    pub fn new(value: Decimal, decimals: u32) -> Self {
        let mut value = value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
        // Rounding never increases the scale, so this only pads zeros.
        value.rescale(decimals);
        Self {
            value,
            decimals: value.scale(),
        }
    }

    /// Parses price text, keeping the precision it was written with.
    ///
    /// Whitespace and the euro sign are ignored. Text without a decimal
    /// separator gets [`DEFAULT_DECIMALS`].
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Unparsable`] if the text is not a number.
    pub fn parse(text: &str) -> Result<Self, PriceError> {
        let value = parse_decimal(text).ok_or_else(|| PriceError::Unparsable(text.to_string()))?;
        Ok(Self::new(value, decimal_places(text)))
    }

    pub fn value(&self) -> Decimal {
        self.value
    }

    pub fn decimals(&self) -> u32 {
        self.decimals
    }

    pub fn is_negative(&self) -> bool {
        self.value.is_sign_negative() && !self.value.is_zero()
    }

    /// Returns the same value shown with at least `decimals` digits.
    pub fn with_min_decimals(&self, decimals: u32) -> Self {
        Self::new(self.value, self.decimals.max(decimals))
    }

    /// Renders the price in German notation with its exact precision,
    /// e.g. `24.110,50`.
    pub fn to_display(&self) -> String {
        format_german(self.value, self.decimals, self.decimals)
    }
}

impl fmt::Display for Price {
    /// Plain dot-decimal form with exactly `decimals` digits, as typed into
    /// an order ticket.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Number of digits after the decimal separator, or [`DEFAULT_DECIMALS`]
/// when the text has none.
pub fn decimal_places(text: &str) -> u32 {
    let normalized = normalize(text);
    match normalized.split_once('.') {
        Some((_, fraction)) => fraction.chars().filter(char::is_ascii_digit).count() as u32,
        None => DEFAULT_DECIMALS,
    }
}

/// Parses price text into a decimal, accepting comma or dot separators.
pub fn parse_decimal(text: &str) -> Option<Decimal> {
    let normalized = normalize(text);
    if normalized.is_empty() {
        return None;
    }
    Decimal::from_str(&normalized).ok()
}

/// Strips currency and whitespace and rewrites the decimal separator to a
/// dot, dropping thousands separators.
fn normalize(text: &str) -> String {
    let cleaned: String = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '€')
        .collect();

    match cleaned.rfind([',', '.']) {
        Some(pos) => {
            let integer: String = cleaned[..pos]
                .chars()
                .filter(|c| *c != '.' && *c != ',')
                .collect();
            format!("{integer}.{}", &cleaned[pos + 1..])
        }
        None => cleaned,
    }
}

/// Formats a decimal with German separators, showing between `min` and
/// `max` fraction digits. Trailing zeros beyond `min` are dropped.
pub fn format_german(value: Decimal, min: u32, max: u32) -> String {
    let max = max.max(min);
    let rounded = value.round_dp_with_strategy(max, RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.normalize().scale().clamp(min, max);
    let mut shown = rounded;
    shown.rescale(digits);

    let negative = shown.is_sign_negative() && !shown.is_zero();
    let text = shown.abs().to_string();
    let (integer, fraction) = match text.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (text, None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3 + 8);
    if negative {
        grouped.push('-');
    }
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    if let Some(fraction) = fraction {
        grouped.push(',');
        grouped.push_str(&fraction);
    }
    grouped
}
