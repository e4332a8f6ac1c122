//! Price offset engine.
//!
//! Turns a live quote into a grid of candidate limit prices: the quote
//! itself plus percentage or fixed offsets around it. Fix mode freezes the
//! grid so quote movement cannot change what a pending click submits.
//!
//! The engine never touches a rendering surface. It reads prices through
//! [`PriceSource`] and hands the chosen price to a [`PriceTarget`].

pub mod adjuster;
pub mod controller;
pub mod fix_mode;
pub mod format;
pub mod generator;
pub mod offset;
pub mod presets;

use crate::models::{AvailablePrices, Price, PriceType};

pub use controller::{ButtonDisplayInfo, ControllerConfig, PriceButtonController};
pub use fix_mode::{FixModeCache, FixState, FixedPriceSnapshot};
pub use generator::{OffsetConfig, OffsetSet, RenderOrder};

/// Where current market prices come from.
pub trait PriceSource {
    /// Returns the current price for a price type, if the quote has one.
    fn current_price(&self, price_type: PriceType) -> Option<Price>;

    /// Reports which price types the current quote offers.
    fn available_prices(&self) -> AvailablePrices;
}

/// Where a selected limit price is sent.
pub trait PriceTarget {
    /// Enters `price` as the limit. With `auto_confirm` the target proceeds
    /// to order confirmation immediately.
    fn set_price(&mut self, price: &Price, auto_confirm: bool);
}
