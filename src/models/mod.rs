//! Domain models shared by the button engine and the front end.
//!
//! Prices are carried as [`Price`] values (a decimal plus its display
//! precision), quotes arrive as the text the broker renders, and positions
//! come from the broker's positions API.

pub mod position;
pub mod price;
pub mod quote;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use position::{Position, PositionList};
pub use price::Price;
pub use quote::{Quote, QuoteBoard};

/// Which side of a quote a price refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceType {
    /// Buy-side quote of a two-sided market.
    Bid,
    /// Sell-side quote of a two-sided market.
    Ask,
    /// The only quote of an instrument without a spread.
    Single,
}

impl PriceType {
    /// Returns the lowercase name used in logs and settings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bid => "bid",
            Self::Ask => "ask",
            Self::Single => "single",
        }
    }

    /// Returns the short label shown above a button column.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Bid => "Bid",
            Self::Ask => "Ask",
            Self::Single => "Kurs",
        }
    }
}

impl fmt::Display for PriceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How an offset is applied to a base price.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OffsetMode {
    /// Offset is a percentage of the base price.
    #[default]
    Percentage,
    /// Offset is an absolute amount in price units.
    Fixed,
}

impl OffsetMode {
    /// Switches between percentage and fixed offsets.
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Percentage => Self::Fixed,
            Self::Fixed => Self::Percentage,
        };
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Percentage => "percentage",
            Self::Fixed => "fixed",
        }
    }
}

/// Which price types the quote source currently offers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AvailablePrices {
    pub has_bid: bool,
    pub has_ask: bool,
    pub has_single: bool,
}

impl AvailablePrices {
    /// Returns the available price types in display order.
    pub fn types(&self) -> Vec<PriceType> {
        let mut types = Vec::with_capacity(2);
        if self.has_single {
            types.push(PriceType::Single);
        } else {
            if self.has_bid {
                types.push(PriceType::Bid);
            }
            if self.has_ask {
                types.push(PriceType::Ask);
            }
        }
        types
    }

    pub fn is_empty(&self) -> bool {
        !self.has_bid && !self.has_ask && !self.has_single
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_mode_toggles() {
        let mut mode = OffsetMode::default();
        assert_eq!(mode, OffsetMode::Percentage);
        mode.toggle();
        assert_eq!(mode, OffsetMode::Fixed);
        mode.toggle();
        assert_eq!(mode, OffsetMode::Percentage);
    }

    #[test]
    fn single_quote_hides_bid_and_ask() {
        let available = AvailablePrices {
            has_bid: true,
            has_ask: true,
            has_single: true,
        };
        assert_eq!(available.types(), vec![PriceType::Single]);
    }

    #[test]
    fn two_sided_types_in_display_order() {
        let available = AvailablePrices {
            has_bid: true,
            has_ask: true,
            has_single: false,
        };
        assert_eq!(available.types(), vec![PriceType::Bid, PriceType::Ask]);
        assert!(AvailablePrices::default().is_empty());
    }

    #[test]
    fn price_type_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&PriceType::Ask).unwrap(), "\"ask\"");
        let mode: OffsetMode = serde_json::from_str("\"fixed\"").unwrap();
        assert_eq!(mode, OffsetMode::Fixed);
    }
}
