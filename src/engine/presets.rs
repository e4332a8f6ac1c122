//! Step-size and percentage presets behind the `<` / `>` controls.
//!
//! Step presets are kept as text because the text defines how many
//! decimals the generated fixed offsets display (`"0.10"` shows two).

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fixed-mode step sizes, smallest to largest.
pub const STEP_PRESETS: [&str; 15] = [
    "0.001", "0.0025", "0.005", "0.01", "0.025", "0.05", "0.10", "0.25", "0.50", "1.00", "2.50",
    "5.00", "10.00", "25.00", "50.00",
];

/// Total button counts (both sides) the count control cycles through.
pub const BUTTON_COUNTS: [u32; 5] = [10, 20, 30, 40, 50];

/// Largest total button count.
pub const MAX_BUTTON_COUNT: u32 = BUTTON_COUNTS[BUTTON_COUNTS.len() - 1];

fn step_value(preset: &str) -> Decimal {
    Decimal::from_str(preset).unwrap_or(Decimal::ZERO)
}

/// Returns the step preset closest to `step`. Ties resolve to the smaller
/// preset.
pub fn nearest_step(step: Decimal) -> &'static str {
    STEP_PRESETS
        .iter()
        .copied()
        .min_by_key(|p| (step_value(p) - step).abs())
        .unwrap_or(STEP_PRESETS[0])
}

fn nearest_step_index(step: Decimal) -> usize {
    let nearest = nearest_step(step);
    STEP_PRESETS.iter().position(|p| *p == nearest).unwrap_or(0)
}

/// Next smaller step preset, saturating at the smallest.
pub fn smaller_step(step: Decimal) -> Decimal {
    let index = nearest_step_index(step).saturating_sub(1);
    step_value(STEP_PRESETS[index])
}

/// Next larger step preset, saturating at the largest.
pub fn larger_step(step: Decimal) -> Decimal {
    let index = (nearest_step_index(step) + 1).min(STEP_PRESETS.len() - 1);
    step_value(STEP_PRESETS[index])
}

/// The largest step preset.
pub fn max_step() -> Decimal {
    step_value(STEP_PRESETS[STEP_PRESETS.len() - 1])
}

/// Display decimals of the preset nearest to `step`.
pub fn step_decimals(step: Decimal) -> u32 {
    step_value(nearest_step(step)).scale()
}

/// Advances the button count to the next entry of [`BUTTON_COUNTS`],
/// wrapping around. Unknown counts restart at the first entry.
pub fn cycle_button_count(current: u32) -> u32 {
    match BUTTON_COUNTS.iter().position(|c| *c == current) {
        Some(i) => BUTTON_COUNTS[(i + 1) % BUTTON_COUNTS.len()],
        None => BUTTON_COUNTS[0],
    }
}

/// Named percentage offset lists, from fine to very coarse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PercentagePreset {
    FineSmall,
    FineMedium,
    #[default]
    Standard,
    Coarse,
    VeryCoarse,
}

impl PercentagePreset {
    pub const ALL: [Self; 5] = [
        Self::FineSmall,
        Self::FineMedium,
        Self::Standard,
        Self::Coarse,
        Self::VeryCoarse,
    ];

    /// Settings key, shown in the status bar.
    pub fn key(&self) -> &'static str {
        match self {
            Self::FineSmall => "fine-small",
            Self::FineMedium => "fine-medium",
            Self::Standard => "standard",
            Self::Coarse => "coarse",
            Self::VeryCoarse => "very-coarse",
        }
    }

    fn raw_values(&self) -> &'static [&'static str] {
        match self {
            Self::FineSmall => &[
                "0.1", "0.2", "0.3", "0.4", "0.5", "0.6", "0.7", "0.8", "0.9", "1", "1.25", "1.5",
                "1.75", "2", "2.5", "3", "4", "5", "10", "15", "20", "25", "30", "40", "50",
            ],
            Self::FineMedium => &[
                "0.2", "0.4", "0.6", "0.8", "1", "1.5", "2", "2.5", "3", "4", "5", "7.5", "10",
                "12.5", "15", "20", "25", "30", "40", "50", "60", "75", "100", "150", "200",
            ],
            Self::Standard => &[
                "0.5", "1", "1.5", "2", "2.5", "3", "4", "5", "7.5", "10", "12.5", "15", "20", "25",
                "30", "35", "40", "50", "75", "100", "125", "150", "200", "250", "300",
            ],
            Self::Coarse => &[
                "1", "2", "3", "4", "5", "7.5", "10", "15", "20", "25", "30", "40", "50", "75",
                "100", "125", "150", "200", "250", "300", "350", "400", "450", "475", "500",
            ],
            Self::VeryCoarse => &[
                "2", "5", "10", "15", "20", "30", "40", "50", "75", "100", "125", "150", "175",
                "200", "225", "250", "275", "300", "350", "400", "425", "450", "475", "490", "500",
            ],
        }
    }

    /// Percentages of this preset, smallest first.
    pub fn values(&self) -> Vec<Decimal> {
        self.raw_values()
            .iter()
            .filter_map(|v| Decimal::from_str(v).ok())
            .collect()
    }

    /// The first `total_buttons / 2` percentages, one per button per side.
    pub fn offsets_for(&self, total_buttons: u32) -> Vec<Decimal> {
        self.values()
            .into_iter()
            .take((total_buttons / 2) as usize)
            .collect()
    }

    /// Next finer preset, saturating.
    pub fn smaller(&self) -> Self {
        let index = self.index().saturating_sub(1);
        Self::ALL[index]
    }

    /// Next coarser preset, saturating.
    pub fn larger(&self) -> Self {
        let index = (self.index() + 1).min(Self::ALL.len() - 1);
        Self::ALL[index]
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|p| p == self).unwrap_or(0)
    }
}
