//! Positions API models.

use rust_decimal::Decimal;
use serde::Deserialize;

/// A held position as returned by the broker's positions endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub isin: String,
    pub quantity: Decimal,
    /// Average entry price.
    pub avg_entry_quote: Decimal,
    /// Last price known to the API, used until a live quote arrives.
    #[serde(default)]
    pub quote: Option<Decimal>,
}

/// Response body of the positions endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PositionList {
    #[serde(default)]
    pub list: Vec<Position>,
}

impl PositionList {
    /// Finds the position for an ISIN.
    pub fn find(&self, isin: &str) -> Option<&Position> {
        self.list.iter().find(|p| p.isin.eq_ignore_ascii_case(isin))
    }
}
