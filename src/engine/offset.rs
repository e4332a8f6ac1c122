//! Offset price calculation.

use rust_decimal::Decimal;

use crate::models::{OffsetMode, Price};

/// Applies an offset to a base price.
///
/// Percentage offsets scale the base (`base * (1 + offset / 100)`), fixed
/// offsets are added. The result is rounded half away from zero to
/// `decimals` digits. Negative results are returned as-is; the display
/// layer disables them.
pub fn calculate(base: &Price, offset: Decimal, mode: OffsetMode, decimals: u32) -> Price {
    let value = match mode {
        OffsetMode::Percentage => base.value() * (Decimal::ONE + offset / Decimal::ONE_HUNDRED),
        OffsetMode::Fixed => base.value() + offset,
    };
    Price::new(value, decimals)
}

/// Text variant of [`calculate`]: unparsable base text is returned
/// unchanged.
pub fn calculate_text(base: &str, offset: Decimal, mode: OffsetMode, decimals: u32) -> String {
    match Price::parse(base) {
        Ok(price) => calculate(&price, offset, mode, decimals).to_string(),
        Err(_) => base.to_string(),
    }
}

/// Precision of an offset price: the longer of the base's and the offset's
/// precision, never below `min_decimals`.
pub fn result_decimals(base: &Price, offset: Decimal, min_decimals: u32) -> u32 {
    base.decimals().max(offset.scale()).max(min_decimals)
}

/// Computes the offset price with precision chosen by [`result_decimals`].
pub fn offset_price(base: &Price, offset: Decimal, mode: OffsetMode, min_decimals: u32) -> Price {
    if offset.is_zero() {
        return base.with_min_decimals(min_decimals);
    }
    calculate(base, offset, mode, result_decimals(base, offset, min_decimals))
}
