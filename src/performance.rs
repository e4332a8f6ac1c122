//! Position performance: how a held position stands against the live quote.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, info, warn};

use crate::engine::format::format_currency;
use crate::models::price::format_german;
use crate::models::{Position, PositionList};

/// Default base URL of the positions API.
pub const DEFAULT_API_URL: &str = "https://mein.finanzen-zero.net";

/// Entry versus current value of a position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Performance {
    pub quantity: Decimal,
    pub entry_price: Decimal,
    pub entry_value: Decimal,
    pub current_value: Decimal,
    pub diff_value: Decimal,
    /// Percentage change against the entry value.
    pub diff_percent: Decimal,
}

impl Performance {
    /// Values `position` at `current_price`, falling back to the last price
    /// the API reported. Returns `None` without any price or with a zero
    /// entry value.
    pub fn compute(position: &Position, current_price: Option<Decimal>) -> Option<Self> {
        let price = current_price.or(position.quote)?;
        let entry_value = position.quantity * position.avg_entry_quote;
        if entry_value.is_zero() {
            return None;
        }
        let current_value = position.quantity * price;
        let diff_value = current_value - entry_value;
        let diff_percent = diff_value / entry_value * Decimal::ONE_HUNDRED;

        Some(Self {
            quantity: position.quantity,
            entry_price: position.avg_entry_quote,
            entry_value,
            current_value,
            diff_value,
            diff_percent,
        })
    }

    pub fn is_gain(&self) -> bool {
        !self.diff_value.is_sign_negative() || self.diff_value.is_zero()
    }

    /// Percentage change with sign and two decimals, e.g. `+2,26 %`.
    pub fn percent_label(&self) -> String {
        let rounded = self
            .diff_percent
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        format!("{}{} %", self.sign(), format_german(rounded, 2, 2))
    }

    /// Absolute change with sign, e.g. `+32,16 €`.
    pub fn value_label(&self) -> String {
        format!("{}{}", self.sign(), format_currency(self.diff_value))
    }

    /// Label/value rows of the performance panel.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Einstandskurs", format_currency(self.entry_price)),
            ("Einstandswert", format_currency(self.entry_value)),
            ("Aktueller Wert", format_currency(self.current_value)),
            ("Performance", self.percent_label()),
            ("Entwicklung seit Kauf", self.value_label()),
        ]
    }

    fn sign(&self) -> &'static str {
        if self.is_gain() { "+" } else { "" }
    }
}

/// Client for the broker's positions endpoint.
pub struct PositionClient {
    http: reqwest::Client,
    base_url: String,
}

impl PositionClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// URL listing all positions of a customer.
    pub fn positions_url(&self, customer_id: &str) -> String {
        format!(
            "{}/api/trading/positions?customerId={customer_id}&withProtectionInfo=true",
            self.base_url.trim_end_matches('/')
        )
    }

    /// Fetches all positions of a customer.
    ///
    /// # Errors
    ///
    /// Returns [`LimitpadError::Http`](crate::LimitpadError::Http) if the
    /// request fails or the server answers with an error status.
    pub async fn fetch_positions(&self, customer_id: &str) -> crate::Result<PositionList> {
        let url = self.positions_url(customer_id);
        debug!(url = url.as_str(), "Fetching positions");
        let positions = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<PositionList>()
            .await?;
        info!(count = positions.list.len(), "Fetched positions");
        Ok(positions)
    }

    /// Fetches the position held in `isin`, if any.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`fetch_positions`](Self::fetch_positions).
    pub async fn find_position(&self, customer_id: &str, isin: &str) -> crate::Result<Option<Position>> {
        let positions = self.fetch_positions(customer_id).await?;
        let position = positions.find(isin).cloned();
        if position.is_none() {
            warn!(isin, "No position held for instrument");
        }
        Ok(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn position(quantity: Decimal, entry: Decimal, quote: Option<Decimal>) -> Position {
        Position {
            isin: "DE0007164600".to_string(),
            quantity,
            avg_entry_quote: entry,
            quote,
        }
    }

    #[test]
    fn computes_gain_against_live_price() {
        let perf = Performance::compute(&position(dec!(12), dec!(118.42), None), Some(dec!(121.10))).unwrap();
        assert_eq!(perf.entry_value, dec!(1421.04));
        assert_eq!(perf.current_value, dec!(1453.20));
        assert_eq!(perf.diff_value, dec!(32.16));
        assert!(perf.is_gain());
        assert_eq!(perf.percent_label(), "+2,26 %");
        assert_eq!(perf.value_label(), "+32,16 €");
    }

    #[test]
    fn loss_has_no_plus_sign() {
        let perf = Performance::compute(&position(dec!(10), dec!(50), None), Some(dec!(45))).unwrap();
        assert_eq!(perf.diff_value, dec!(-50));
        assert!(!perf.is_gain());
        assert_eq!(perf.percent_label(), "-10,00 %");
        assert_eq!(perf.value_label(), "-50,00 €");
    }

    #[test]
    fn falls_back_to_api_quote() {
        let perf = Performance::compute(&position(dec!(1), dec!(100), Some(dec!(110))), None).unwrap();
        assert_eq!(perf.diff_percent, dec!(10));
        assert!(Performance::compute(&position(dec!(1), dec!(100), None), None).is_none());
    }

    #[test]
    fn zero_entry_value_has_no_performance() {
        assert!(Performance::compute(&position(dec!(0), dec!(100), None), Some(dec!(1))).is_none());
    }

    #[test]
    fn panel_rows_are_labelled() {
        let perf = Performance::compute(&position(dec!(2), dec!(10), None), Some(dec!(10))).unwrap();
        let rows = perf.rows();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0], ("Einstandskurs", "10,00 €".to_string()));
        assert_eq!(rows[3].1, "+0,00 %");
    }

    #[test]
    fn builds_positions_url() {
        let client = PositionClient::new("https://broker.example/");
        assert_eq!(
            client.positions_url("1234567"),
            "https://broker.example/api/trading/positions?customerId=1234567&withProtectionInfo=true"
        );
    }
}
