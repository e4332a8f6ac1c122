//! Price button controller: resolves what each button shows and submits.
//!
//! The controller owns the quote source, the price target, the offset set
//! and the fix-mode cache. Live buttons are recomputed from the source on
//! every request; frozen buttons read the cache.

use rust_decimal::Decimal;
use tracing::{debug, info};

use super::fix_mode::{FixModeCache, FixState};
use super::format::{format_for_display, offset_label};
use super::generator::{OffsetConfig, OffsetSet};
use super::offset::offset_price;
use super::{PriceSource, PriceTarget};
use crate::error::PriceError;
use crate::models::{Price, PriceType};

/// Label of a disabled button that keeps its slot in the grid.
pub const ZERO_WIDTH_LABEL: &str = "\u{200B}";

/// Opacity of disabled buttons.
pub const DISABLED_OPACITY: f32 = 0.3;

/// What one button shows.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonDisplayInfo {
    pub label: String,
    /// Price submitted on click; `None` for disabled buttons.
    pub price: Option<Price>,
    pub disabled: bool,
    pub opacity: f32,
}

impl ButtonDisplayInfo {
    fn enabled(label: String, price: Price) -> Self {
        Self {
            label,
            price: Some(price),
            disabled: false,
            opacity: 1.0,
        }
    }

    /// Disabled button for a missing price.
    fn blank() -> Self {
        Self {
            label: String::new(),
            price: None,
            disabled: true,
            opacity: DISABLED_OPACITY,
        }
    }

    /// Disabled button for a negative price.
    fn placeholder() -> Self {
        Self {
            label: ZERO_WIDTH_LABEL.to_string(),
            ..Self::blank()
        }
    }
}

/// Controller settings, passed in by the owner of the settings store.
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerConfig {
    pub offsets: OffsetConfig,
    /// Proceed to order confirmation right after setting the limit.
    pub auto_confirm: bool,
    /// Lowest precision of computed prices.
    pub min_decimals: u32,
    /// Appended to the main button label, e.g. `" als Limit"`.
    pub main_label_suffix: String,
}

/// Drives one button grid.
pub struct PriceButtonController<S, T> {
    source: S,
    target: T,
    config: ControllerConfig,
    offsets: OffsetSet,
    fix: FixModeCache,
}

impl<S: PriceSource, T: PriceTarget> PriceButtonController<S, T> {
    pub fn new(source: S, target: T, config: ControllerConfig) -> Self {
        let offsets = OffsetSet::generate(&config.offsets);
        Self {
            source,
            target,
            config,
            offsets,
            fix: FixModeCache::new(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutable access for feeding new quotes.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn offset_set(&self) -> &OffsetSet {
        &self.offsets
    }

    pub fn fix_state(&self) -> FixState {
        self.fix.state()
    }

    pub fn is_frozen(&self) -> bool {
        self.fix.is_frozen()
    }

    pub fn fix_cache(&self) -> &FixModeCache {
        &self.fix
    }

    /// Freezes one price type. Returns `false` if it has no current price.
    pub fn activate_fix_mode(&mut self, price_type: PriceType) -> bool {
        self.fix.activate(
            price_type,
            &self.source,
            self.offsets.mode(),
            self.offsets.offsets(),
            self.config.min_decimals,
        )
    }

    pub fn deactivate_fix_mode(&mut self) {
        self.fix.deactivate();
    }

    /// Toggles fix mode for whatever the quote currently offers: a single
    /// quote freezes `Single`, a two-sided quote freezes both sides.
    pub fn toggle_fix_mode(&mut self) -> FixState {
        if self.fix.is_frozen() {
            self.deactivate_fix_mode();
        } else {
            for price_type in self.source.available_prices().types() {
                self.activate_fix_mode(price_type);
            }
        }
        self.fix.state()
    }

    /// Resolves the price behind a button without side effects.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::NoActivePrice`] if the live source or the
    /// frozen grid has no price for this button.
    pub fn resolve_price(&self, price_type: PriceType, offset: Decimal) -> Result<Price, PriceError> {
        match self.fix.state() {
            FixState::Frozen => self
                .fix
                .get_price(price_type, offset)
                .ok_or(PriceError::NoActivePrice(price_type)),
            FixState::Live => {
                debug_assert!(
                    offset.is_zero() || self.offsets.contains(offset),
                    "offset {offset} is not part of the configured grid"
                );
                let base = self
                    .source
                    .current_price(price_type)
                    .ok_or(PriceError::NoActivePrice(price_type))?;
                Ok(offset_price(&base, offset, self.offsets.mode(), self.config.min_decimals))
            }
        }
    }

    /// What the offset button `(price_type, offset)` shows right now.
    ///
    /// Live buttons are labelled with the signed offset, frozen ones with the
    /// frozen absolute price. Missing prices give a blank disabled button and
    /// negative prices a disabled placeholder.
    pub fn display_info(&self, price_type: PriceType, offset: Decimal) -> ButtonDisplayInfo {
        let Ok(price) = self.resolve_price(price_type, offset) else {
            return ButtonDisplayInfo::blank();
        };
        if price.is_negative() {
            return ButtonDisplayInfo::placeholder();
        }

        let label = match self.fix.state() {
            FixState::Frozen => format_for_display(&price.to_string()),
            FixState::Live => offset_label(offset, self.offsets.mode()),
        };
        ButtonDisplayInfo::enabled(label, price)
    }

    /// What the main (zero offset) button shows: the resolved absolute
    /// price followed by the configured suffix.
    pub fn main_display(&self, price_type: PriceType) -> ButtonDisplayInfo {
        match self.resolve_price(price_type, Decimal::ZERO) {
            Ok(price) if !price.is_negative() => {
                let label = format!("{}{}", price.to_display(), self.config.main_label_suffix);
                ButtonDisplayInfo::enabled(label, price)
            }
            Ok(_) => ButtonDisplayInfo::placeholder(),
            Err(_) => ButtonDisplayInfo::blank(),
        }
    }

    /// Hands the button's price to the target. Returns the submitted price,
    /// or `None` when the button is disabled.
    pub fn click(&mut self, price_type: PriceType, offset: Decimal) -> Option<Price> {
        let price = match self.resolve_price(price_type, offset) {
            Ok(price) if !price.is_negative() => price,
            Ok(price) => {
                debug!(%price, "Ignoring click on negative price");
                return None;
            }
            Err(e) => {
                debug!(error = %e, "Ignoring click without price");
                return None;
            }
        };

        info!(
            price_type = price_type.as_str(),
            %offset,
            %price,
            auto_confirm = self.config.auto_confirm,
            frozen = self.fix.is_frozen(),
            "Setting limit price"
        );
        self.target.set_price(&price, self.config.auto_confirm);
        Some(price)
    }

    /// Replaces the configuration. A different offset configuration
    /// regenerates the grid and leaves fix mode, because frozen prices no
    /// longer match the buttons.
    pub fn update_config(&mut self, config: ControllerConfig) {
        let offsets_changed =
            config.offsets != self.config.offsets || config.min_decimals != self.config.min_decimals;
        self.config = config;

        if offsets_changed {
            self.offsets = OffsetSet::generate(&self.config.offsets);
            if self.fix.is_frozen() {
                info!("Offset configuration changed, leaving fix mode");
                self.fix.deactivate();
            }
        }
    }
}
