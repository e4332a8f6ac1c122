//! Settings file loading tests.

mod common;

use std::io::Write;

use rust_decimal_macros::dec;

use common::fixtures_dir;
use limitpad::LimitpadError;
use limitpad::engine::OffsetSet;
use limitpad::engine::presets::PercentagePreset;
use limitpad::models::OffsetMode;
use limitpad::settings::Settings;

#[test]
fn test_fixture_settings_load() {
    let settings = Settings::load(&fixtures_dir().join("settings.json")).expect("valid settings");

    assert_eq!(settings.offset_button_mode, OffsetMode::Fixed);
    assert_eq!(settings.offset_button_step, dec!(0.10));
    assert_eq!(settings.offset_button_count, 10);
    assert_eq!(settings.percentage_preset, PercentagePreset::Coarse);
    assert!(!settings.auto_check_enabled);
    assert!(!settings.confirm_page_performance_info_enabled);
    assert_eq!(settings.main_label_suffix, " als Limit übernehmen");
    assert_eq!(settings.simulation.start, dec!(24110.50));
    assert_eq!(settings.simulation.spread_ticks, 0);
    assert_eq!(settings.simulation.max_lag_secs, 6);

    let thresholds = settings.latency_thresholds();
    assert_eq!(thresholds.warning_secs, 2);
    assert_eq!(thresholds.critical_secs, 8);
}

#[test]
fn test_fixture_controller_config() {
    let settings = Settings::load(&fixtures_dir().join("settings.json")).expect("valid settings");
    let config = settings.controller_config();

    assert!(!config.auto_confirm);
    assert_eq!(config.offsets.mode, OffsetMode::Fixed);
    assert!(config.offsets.explicit.is_empty());
    assert_eq!(config.offsets.count, 5);

    let percentage = Settings {
        offset_button_mode: OffsetMode::Percentage,
        ..settings
    };
    assert_eq!(
        percentage.offset_config().explicit,
        vec![dec!(0.25), dec!(0.5), dec!(1)]
    );
}

#[test]
fn test_invalid_thresholds_rejected() {
    let err = Settings::load(&fixtures_dir().join("invalid_settings.json")).unwrap_err();
    assert!(matches!(err, LimitpadError::Config(_)));
    assert!(err.to_string().contains("criticalThreshold"));
}

#[test]
fn test_settings_file_not_found() {
    let err = Settings::load(&fixtures_dir().join("nonexistent.json")).unwrap_err();
    assert!(err.to_string().contains("failed to read"));
}

#[test]
fn test_malformed_json_is_a_json_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "{{ \"offsetButtonCount\": \"many\" }}").expect("write settings");

    let err = Settings::load(file.path()).unwrap_err();
    assert!(matches!(err, LimitpadError::Json(_)));
}

#[test]
fn test_empty_object_gives_defaults() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "{{}}").expect("write settings");

    let settings = Settings::load(file.path()).expect("defaults are valid");
    assert_eq!(settings, Settings::default());
}

fn load_json(json: &str) -> limitpad::Result<Settings> {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "{json}").expect("write settings");
    Settings::load(file.path())
}

#[test]
fn test_oversized_step_rejected() {
    let err = load_json(
        r#"{"offsetButtonMode":"fixed","offsetButtonStep":"10000000000000000000000000000","offsetButtonCount":20}"#,
    )
    .unwrap_err();
    assert!(matches!(err, LimitpadError::Config(_)));
    assert!(err.to_string().contains("offsetButtonStep"));

    let largest = load_json(r#"{"offsetButtonMode":"fixed","offsetButtonStep":"50.00"}"#)
        .expect("largest preset is valid");
    assert_eq!(largest.offset_config().count, 10);
}

#[test]
fn test_oversized_button_count_rejected() {
    let err = load_json(r#"{"offsetButtonCount":4294967295}"#).unwrap_err();
    assert!(matches!(err, LimitpadError::Config(_)));
    assert!(err.to_string().contains("offsetButtonCount"));

    let settings = load_json(r#"{"offsetButtonMode":"fixed","offsetButtonCount":50}"#)
        .expect("largest count is valid");
    assert_eq!(OffsetSet::generate(&settings.offset_config()).len(), 50);
}
