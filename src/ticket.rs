//! Order ticket: the limit field the price buttons write into.

use rust_decimal::Decimal;
use tracing::info;

use crate::engine::PriceTarget;
use crate::engine::adjuster;
use crate::models::Price;

/// In-memory order ticket.
#[derive(Debug, Default)]
pub struct OrderTicket {
    limit: Option<Price>,
    confirmed: bool,
    submissions: usize,
}

impl OrderTicket {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current limit, if one was entered.
    pub fn limit(&self) -> Option<&Price> {
        self.limit.as_ref()
    }

    /// Limit as the input field shows it; empty until a limit is set.
    pub fn limit_text(&self) -> String {
        self.limit.as_ref().map(Price::to_display).unwrap_or_default()
    }

    /// Whether the last limit proceeded to order confirmation.
    pub fn is_confirmed(&self) -> bool {
        self.confirmed
    }

    /// Number of limits entered so far.
    pub fn submissions(&self) -> usize {
        self.submissions
    }

    /// Applies a `+`/`-` nudge to the entered limit.
    pub fn adjust(&mut self, delta: Decimal) -> &Price {
        let current = self.limit.as_ref().map(Price::to_string).unwrap_or_default();
        let adjusted = adjuster::adjust(&current, delta);
        info!(%delta, limit = %adjusted, "Limit adjusted");
        self.confirmed = false;
        self.limit.insert(adjusted)
    }

    pub fn clear(&mut self) {
        self.limit = None;
        self.confirmed = false;
    }
}

impl PriceTarget for OrderTicket {
    fn set_price(&mut self, price: &Price, auto_confirm: bool) {
        self.limit = Some(price.clone());
        self.confirmed = auto_confirm;
        self.submissions += 1;
        info!(limit = %price, auto_confirm, "Limit entered");
    }
}
