//! Offset set generation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::OffsetMode;

/// Settings that determine which offsets the button grid shows.
///
/// Any change to this value invalidates frozen prices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffsetConfig {
    pub mode: OffsetMode,
    /// Explicit offsets. When non-empty, `step` and `count` are ignored.
    #[serde(default)]
    pub explicit: Vec<Decimal>,
    /// Distance between generated offsets.
    pub step: Decimal,
    /// Generated offsets per side.
    pub count: u32,
}

/// Vertical order of the positive offset block above the main button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOrder {
    /// Largest offset at the top, nearest to the main button at the bottom.
    LargestFirst,
    /// Smallest offset at the top.
    SmallestFirst,
}

impl RenderOrder {
    /// Percentage grids render largest-first, fixed-step grids
    /// smallest-first. Both layouts are established UI and kept distinct.
    pub fn for_mode(mode: OffsetMode) -> Self {
        match mode {
            OffsetMode::Percentage => Self::LargestFirst,
            OffsetMode::Fixed => Self::SmallestFirst,
        }
    }
}

/// The offsets shown for one configuration: every positive offset in
/// ascending order followed by the mirrored negatives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffsetSet {
    mode: OffsetMode,
    offsets: Vec<Decimal>,
}

impl OffsetSet {
    /// Builds the offset set for a configuration.
    pub fn generate(config: &OffsetConfig) -> Self {
        Self {
            mode: config.mode,
            offsets: generate_offsets(&config.explicit, config.step, config.count),
        }
    }

    pub fn mode(&self) -> OffsetMode {
        self.mode
    }

    /// All offsets: positives ascending, then negatives by ascending
    /// magnitude.
    pub fn offsets(&self) -> &[Decimal] {
        &self.offsets
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn contains(&self, offset: Decimal) -> bool {
        self.offsets.contains(&offset)
    }

    pub fn render_order(&self) -> RenderOrder {
        RenderOrder::for_mode(self.mode)
    }

    /// Positive offsets in display order, top to bottom.
    pub fn above_main(&self) -> Vec<Decimal> {
        let mut positives: Vec<Decimal> = self
            .offsets
            .iter()
            .copied()
            .filter(|o| o.is_sign_positive())
            .collect();
        if self.render_order() == RenderOrder::LargestFirst {
            positives.reverse();
        }
        positives
    }

    /// Negative offsets in display order, nearest to the main button first.
    pub fn below_main(&self) -> Vec<Decimal> {
        self.offsets
            .iter()
            .copied()
            .filter(|o| o.is_sign_negative())
            .collect()
    }
}

/// Produces the offsets for one side pair.
///
/// A non-empty `explicit` list is deduplicated by magnitude, sorted and
/// mirrored. Otherwise `count` multiples of `step` are generated per side,
/// stopping at the first multiple that overflows.
/// Zero never appears; it is the main button.
pub fn generate_offsets(explicit: &[Decimal], step: Decimal, count: u32) -> Vec<Decimal> {
    let mut magnitudes: Vec<Decimal> = if explicit.is_empty() {
        (1..=count)
            .map_while(|i| step.abs().checked_mul(Decimal::from(i)))
            .collect()
    } else {
        let mut values: Vec<Decimal> = explicit.iter().map(Decimal::abs).collect();
        values.sort();
        values.dedup();
        values
    };
    magnitudes.retain(|m| !m.is_zero());

    let mut offsets = Vec::with_capacity(magnitudes.len() * 2);
    offsets.extend(magnitudes.iter().copied());
    offsets.extend(magnitudes.iter().map(|m| -*m));
    offsets
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn step_config(mode: OffsetMode, step: Decimal, count: u32) -> OffsetConfig {
        OffsetConfig {
            mode,
            explicit: Vec::new(),
            step,
            count,
        }
    }

    #[test]
    fn overflowing_multiples_are_cut_off() {
        let offsets = generate_offsets(&[], Decimal::MAX, 3);
        assert_eq!(offsets, vec![Decimal::MAX, -Decimal::MAX]);
    }

    #[test]
    fn generates_step_multiples_per_side() {
        let set = OffsetSet::generate(&step_config(OffsetMode::Fixed, dec!(0.05), 3));
        assert_eq!(
            set.offsets(),
            &[
                dec!(0.05),
                dec!(0.10),
                dec!(0.15),
                dec!(-0.05),
                dec!(-0.10),
                dec!(-0.15)
            ]
        );
        assert_eq!(set.len(), 6);
    }

    #[test]
    fn explicit_list_is_deduplicated_and_sorted() {
        let offsets = generate_offsets(&[dec!(2), dec!(0.5), dec!(-1), dec!(1.0), dec!(0.50)], dec!(9), 9);
        assert_eq!(
            offsets,
            vec![dec!(0.5), dec!(1), dec!(2), dec!(-0.5), dec!(-1), dec!(-2)]
        );
    }

    #[test]
    fn zero_is_never_an_offset() {
        assert_eq!(generate_offsets(&[dec!(0), dec!(1)], dec!(1), 0), vec![dec!(1), dec!(-1)]);
        assert!(generate_offsets(&[], dec!(0), 3).is_empty());
        assert!(generate_offsets(&[], dec!(1), 0).is_empty());
    }

    #[test]
    fn percentage_renders_largest_first() {
        let config = OffsetConfig {
            mode: OffsetMode::Percentage,
            explicit: vec![dec!(1), dec!(2), dec!(5)],
            step: dec!(0.05),
            count: 10,
        };
        let set = OffsetSet::generate(&config);
        assert_eq!(set.render_order(), RenderOrder::LargestFirst);
        assert_eq!(set.above_main(), vec![dec!(5), dec!(2), dec!(1)]);
        assert_eq!(set.below_main(), vec![dec!(-1), dec!(-2), dec!(-5)]);
    }

    #[test]
    fn fixed_renders_smallest_first() {
        let set = OffsetSet::generate(&step_config(OffsetMode::Fixed, dec!(0.25), 2));
        assert_eq!(set.render_order(), RenderOrder::SmallestFirst);
        assert_eq!(set.above_main(), vec![dec!(0.25), dec!(0.50)]);
        assert_eq!(set.below_main(), vec![dec!(-0.25), dec!(-0.50)]);
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = step_config(OffsetMode::Fixed, dec!(0.05), 10);
        let json = serde_json::to_string(&config).unwrap();
        let back: OffsetConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
