//! Fix mode: freezing the button grid at activation time.
//!
//! Each price type is frozen independently, so the bid and ask columns of
//! a two-sided quote can both be fixed. Every mutation builds the next
//! state completely and installs it with a single assignment; a reader
//! sees either the old or the new grid, never a mix.

use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;
use tracing::{debug, info};

use super::PriceSource;
use super::offset::offset_price;
use crate::models::{OffsetMode, Price, PriceType};

/// Whether the grid tracks the live quote or shows frozen prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixState {
    Live,
    Frozen,
}

/// Prices captured for one price type when fix mode was activated.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedPriceSnapshot {
    base: Price,
    prices: HashMap<Decimal, Price>,
}

impl FixedPriceSnapshot {
    /// Computes the zero-offset price and every offset price from `base`.
    pub fn capture(base: Price, mode: OffsetMode, offsets: &[Decimal], min_decimals: u32) -> Self {
        let mut prices = HashMap::with_capacity(offsets.len() + 1);
        prices.insert(Decimal::ZERO, base.with_min_decimals(min_decimals));
        for offset in offsets {
            prices.insert(*offset, offset_price(&base, *offset, mode, min_decimals));
        }
        Self { base, prices }
    }

    /// The quote at activation time, as read from the source.
    pub fn base(&self) -> &Price {
        &self.base
    }

    /// The frozen price for an offset (zero for the main button).
    pub fn price(&self, offset: Decimal) -> Option<&Price> {
        self.prices.get(&offset)
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

/// Owner of all frozen prices.
#[derive(Debug, Clone, Default)]
pub struct FixModeCache {
    frozen: Option<BTreeMap<PriceType, FixedPriceSnapshot>>,
}

impl FixModeCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FixState {
        if self.frozen.is_some() {
            FixState::Frozen
        } else {
            FixState::Live
        }
    }

    pub fn is_frozen(&self) -> bool {
        self.state() == FixState::Frozen
    }

    /// Freezes the current price of `price_type` and all its offset prices.
    ///
    /// Other frozen price types are kept; an earlier snapshot of the same
    /// price type is replaced. Returns `false` and stays unchanged when the
    /// source has no price for `price_type`.
    pub fn activate<S: PriceSource + ?Sized>(
        &mut self,
        price_type: PriceType,
        source: &S,
        mode: OffsetMode,
        offsets: &[Decimal],
        min_decimals: u32,
    ) -> bool {
        let Some(base) = source.current_price(price_type) else {
            debug!(price_type = price_type.as_str(), "No price to freeze");
            return false;
        };

        let snapshot = FixedPriceSnapshot::capture(base, mode, offsets, min_decimals);
        info!(
            price_type = price_type.as_str(),
            base = %snapshot.base(),
            offsets = offsets.len(),
            "Fix mode activated"
        );

        let mut next = self.frozen.clone().unwrap_or_default();
        next.insert(price_type, snapshot);
        self.frozen = Some(next);
        true
    }

    /// Drops every frozen price and returns to live prices.
    pub fn deactivate(&mut self) {
        if self.frozen.take().is_some() {
            info!("Fix mode deactivated");
        }
    }

    /// Returns the frozen price for `(price_type, offset)`.
    ///
    /// `None` while live, for a price type that was not frozen, or for an
    /// offset that was not configured at activation.
    pub fn get_price(&self, price_type: PriceType, offset: Decimal) -> Option<Price> {
        self.snapshot(price_type)?.price(offset).cloned()
    }

    pub fn snapshot(&self, price_type: PriceType) -> Option<&FixedPriceSnapshot> {
        self.frozen.as_ref()?.get(&price_type)
    }
}
