//! User settings loaded from a JSON file.
//!
//! The file uses the camelCase keys of the broker extension's settings
//! store. Every key is optional; missing keys take their defaults.

use std::path::Path;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::engine::presets::{MAX_BUTTON_COUNT, PercentagePreset, max_step, step_decimals};
use crate::engine::{ControllerConfig, OffsetConfig};
use crate::latency::LatencyThresholds;
use crate::models::OffsetMode;
use crate::models::price::DEFAULT_DECIMALS;
use crate::simulation::SimulationSettings;

/// Default suffix of the main button label.
pub const DEFAULT_MAIN_LABEL_SUFFIX: &str = " als Limit";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub latency_monitor_enabled: bool,
    /// Quote age in seconds at which the latency badge turns yellow.
    pub warning_threshold: i64,
    /// Quote age in seconds at which the latency badge turns red.
    pub critical_threshold: i64,
    /// Proceed to order confirmation right after a button click.
    pub auto_check_enabled: bool,
    pub offset_buttons_enabled: bool,
    pub offset_button_mode: OffsetMode,
    /// Explicit percentages, e.g. `"0,5; 1; 2"` or `"0.5, 1, 2"`. Empty
    /// selects [`Settings::percentage_preset`].
    pub custom_offsets: String,
    pub percentage_preset: PercentagePreset,
    /// Distance between fixed offsets.
    pub offset_button_step: Decimal,
    /// Total offset buttons, split evenly between both sides.
    pub offset_button_count: u32,
    pub limit_adjuster_enabled: bool,
    pub confirm_page_performance_info_enabled: bool,
    pub main_label_suffix: String,
    pub simulation: SimulationSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            latency_monitor_enabled: true,
            warning_threshold: 3,
            critical_threshold: 5,
            auto_check_enabled: true,
            offset_buttons_enabled: true,
            offset_button_mode: OffsetMode::Percentage,
            custom_offsets: String::new(),
            percentage_preset: PercentagePreset::Standard,
            offset_button_step: Decimal::new(5, 2),
            offset_button_count: 20,
            limit_adjuster_enabled: true,
            confirm_page_performance_info_enabled: true,
            main_label_suffix: DEFAULT_MAIN_LABEL_SUFFIX.to_string(),
            simulation: SimulationSettings::default(),
        }
    }
}

impl Settings {
    /// Loads and validates settings from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// values fail [`validate`](Self::validate).
    pub fn load(path: &Path) -> crate::Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            crate::LimitpadError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        let settings: Self = serde_json::from_str(&contents)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`LimitpadError::Config`](crate::LimitpadError::Config) when
    /// a threshold is negative, the critical threshold is below the warning
    /// threshold, the step is not positive or above the largest preset, or
    /// the button count is above [`MAX_BUTTON_COUNT`].
    pub fn validate(&self) -> crate::Result<()> {
        if self.warning_threshold < 0 {
            return Err(crate::LimitpadError::Config(format!(
                "warningThreshold must not be negative, got {}",
                self.warning_threshold
            )));
        }
        if self.critical_threshold < self.warning_threshold {
            return Err(crate::LimitpadError::Config(format!(
                "criticalThreshold ({}) is below warningThreshold ({})",
                self.critical_threshold, self.warning_threshold
            )));
        }
        if self.offset_button_step <= Decimal::ZERO {
            return Err(crate::LimitpadError::Config(format!(
                "offsetButtonStep must be positive, got {}",
                self.offset_button_step
            )));
        }
        if self.offset_button_step > max_step() {
            return Err(crate::LimitpadError::Config(format!(
                "offsetButtonStep must not exceed {}, got {}",
                max_step(),
                self.offset_button_step
            )));
        }
        if self.offset_button_count > MAX_BUTTON_COUNT {
            return Err(crate::LimitpadError::Config(format!(
                "offsetButtonCount must not exceed {MAX_BUTTON_COUNT}, got {}",
                self.offset_button_count
            )));
        }
        Ok(())
    }

    /// Custom percentages parsed from [`Settings::custom_offsets`].
    pub fn custom_offset_values(&self) -> Vec<Decimal> {
        parse_offset_list(&self.custom_offsets)
    }

    /// Offsets the button grid shows for the current mode.
    ///
    /// Percentage mode uses the custom list when one is set and otherwise
    /// the selected preset. Fixed mode generates multiples of the step.
    pub fn offset_config(&self) -> OffsetConfig {
        let per_side = self.offset_button_count / 2;
        match self.offset_button_mode {
            OffsetMode::Percentage => {
                let custom = self.custom_offset_values();
                let explicit = if custom.is_empty() {
                    self.percentage_preset.offsets_for(self.offset_button_count)
                } else {
                    custom
                };
                OffsetConfig {
                    mode: OffsetMode::Percentage,
                    explicit,
                    step: self.display_step(),
                    count: per_side,
                }
            }
            OffsetMode::Fixed => OffsetConfig {
                mode: OffsetMode::Fixed,
                explicit: Vec::new(),
                step: self.display_step(),
                count: per_side,
            },
        }
    }

    /// The step padded to the decimals of its nearest preset, so `0.1`
    /// labels as `+0,10`.
    fn display_step(&self) -> Decimal {
        let mut step = self.offset_button_step;
        let decimals = step_decimals(step);
        if step.scale() < decimals {
            step.rescale(decimals);
        }
        step
    }

    pub fn latency_thresholds(&self) -> LatencyThresholds {
        LatencyThresholds {
            warning_secs: self.warning_threshold,
            critical_secs: self.critical_threshold,
        }
    }

    pub fn controller_config(&self) -> ControllerConfig {
        ControllerConfig {
            offsets: self.offset_config(),
            auto_confirm: self.auto_check_enabled,
            min_decimals: DEFAULT_DECIMALS,
            main_label_suffix: self.main_label_suffix.clone(),
        }
    }
}

/// Parses a user-entered offset list.
///
/// With a `;` anywhere the list is `;`-separated and commas are decimal
/// separators (`"0,5; 1; 2,5"`). Otherwise it is `,`-separated with dot
/// decimals (`"0.5, 1, 2.5"`). `%` signs are ignored and entries that are
/// not numbers are skipped.
pub fn parse_offset_list(text: &str) -> Vec<Decimal> {
    let cleaned = text.replace('%', "");
    let entries: Vec<String> = if cleaned.contains(';') {
        cleaned.split(';').map(|e| e.trim().replace(',', ".")).collect()
    } else {
        cleaned.split(',').map(|e| e.trim().to_string()).collect()
    };
    entries
        .iter()
        .filter(|e| !e.is_empty())
        .filter_map(|e| Decimal::from_str(e).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::OffsetSet;
    use crate::engine::format::offset_label;
    use rust_decimal_macros::dec;

    #[test]
    fn defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.main_label_suffix, " als Limit");
    }

    #[test]
    fn missing_keys_take_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"offsetButtonMode": "fixed"}"#).unwrap();
        assert_eq!(settings.offset_button_mode, OffsetMode::Fixed);
        assert_eq!(settings.offset_button_count, 20);
        assert!(settings.latency_monitor_enabled);
    }

    #[test]
    fn parses_semicolon_lists_with_comma_decimals() {
        assert_eq!(parse_offset_list("0,5; 1; 2,5%"), vec![dec!(0.5), dec!(1), dec!(2.5)]);
    }

    #[test]
    fn parses_comma_lists_with_dot_decimals() {
        assert_eq!(parse_offset_list("0.5, 1,2.5"), vec![dec!(0.5), dec!(1), dec!(2.5)]);
        assert!(parse_offset_list("").is_empty());
        assert_eq!(parse_offset_list("abc, 3"), vec![dec!(3)]);
    }

    #[test]
    fn percentage_mode_prefers_custom_offsets() {
        let settings = Settings {
            custom_offsets: "1; 2".to_string(),
            ..Settings::default()
        };
        assert_eq!(settings.offset_config().explicit, vec![dec!(1), dec!(2)]);
    }

    #[test]
    fn percentage_mode_falls_back_to_preset() {
        let settings = Settings {
            offset_button_count: 10,
            ..Settings::default()
        };
        let config = settings.offset_config();
        assert_eq!(config.explicit, PercentagePreset::Standard.offsets_for(10));
        assert_eq!(config.explicit.len(), 5);
    }

    #[test]
    fn fixed_mode_uses_step() {
        let settings = Settings {
            offset_button_mode: OffsetMode::Fixed,
            offset_button_step: dec!(0.10),
            offset_button_count: 30,
            ..Settings::default()
        };
        let config = settings.offset_config();
        assert!(config.explicit.is_empty());
        assert_eq!(config.step, dec!(0.10));
        assert_eq!(config.count, 15);
    }

    #[test]
    fn step_takes_preset_decimals() {
        let settings = Settings {
            offset_button_mode: OffsetMode::Fixed,
            offset_button_step: dec!(0.1),
            offset_button_count: 4,
            ..Settings::default()
        };
        let config = settings.offset_config();
        assert_eq!(config.step.scale(), 2);

        let set = OffsetSet::generate(&config);
        let labels: Vec<String> = set
            .offsets()
            .iter()
            .map(|o| offset_label(*o, OffsetMode::Fixed))
            .collect();
        assert_eq!(labels, vec!["+0,10", "+0,20", "-0,10", "-0,20"]);
    }

    #[test]
    fn finer_steps_keep_their_scale() {
        let settings = Settings {
            offset_button_step: dec!(0.0001),
            ..Settings::default()
        };
        assert_eq!(settings.offset_config().step.scale(), 4);
    }

    #[test]
    fn rejects_inverted_thresholds() {
        let settings = Settings {
            warning_threshold: 10,
            critical_threshold: 5,
            ..Settings::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("criticalThreshold"));
    }

    #[test]
    fn rejects_non_positive_step() {
        let settings = Settings {
            offset_button_step: Decimal::ZERO,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }
}
