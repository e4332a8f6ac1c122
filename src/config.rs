//! Application configuration loaded from environment variables.
//!
//! - `LIMITPAD_SETTINGS` — path to a JSON settings file (optional)
//! - `LIMITPAD_API_URL` — positions API base URL
//! - `LIMITPAD_CUSTOMER_ID` / `LIMITPAD_ISIN` — position shown in the
//!   performance panel (optional, the ISIN requires a customer ID)
//! - `LIMITPAD_LOG_FILE` — log destination, default `limitpad.log`

use std::path::PathBuf;

use crate::performance::DEFAULT_API_URL;
use crate::settings::Settings;

/// Default log file, relative to the working directory.
const DEFAULT_LOG_FILE: &str = "limitpad.log";

/// Top-level application configuration.
#[derive(Debug)]
pub struct AppConfig {
    pub settings_path: Option<PathBuf>,
    pub api: ApiConfig,
    pub log_file: PathBuf,
}

/// Positions API configuration.
#[derive(Debug)]
pub struct ApiConfig {
    pub base_url: String,
    pub customer_id: Option<String>,
    pub isin: Option<String>,
}

impl ApiConfig {
    /// Customer and ISIN when a position lookup is configured.
    pub fn position_lookup(&self) -> Option<(&str, &str)> {
        Some((self.customer_id.as_deref()?, self.isin.as_deref()?))
    }
}

impl AppConfig {
    /// Loads settings from `LIMITPAD_SETTINGS`, or defaults when unset.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Settings::load`].
    pub fn load_settings(&self) -> crate::Result<Settings> {
        match &self.settings_path {
            Some(path) => Settings::load(path),
            None => Ok(Settings::default()),
        }
    }
}

/// Loads the application configuration from environment variables.
///
/// # Errors
///
/// Returns [`LimitpadError::Config`](crate::LimitpadError::Config) if the
/// customer ID is not numeric or an ISIN is set without a customer ID.
pub fn fetch_config() -> crate::Result<AppConfig> {
    let settings_path = non_empty_var("LIMITPAD_SETTINGS").map(PathBuf::from);
    let base_url = non_empty_var("LIMITPAD_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
    let customer_id = non_empty_var("LIMITPAD_CUSTOMER_ID");
    let isin = non_empty_var("LIMITPAD_ISIN");
    let log_file = non_empty_var("LIMITPAD_LOG_FILE")
        .map_or_else(|| PathBuf::from(DEFAULT_LOG_FILE), PathBuf::from);

    if let Some(id) = customer_id.as_deref().filter(|id| !id.chars().all(|c| c.is_ascii_digit())) {
        return Err(crate::LimitpadError::Config(format!(
            "LIMITPAD_CUSTOMER_ID must be numeric, got {id:?}"
        )));
    }
    if isin.is_some() && customer_id.is_none() {
        return Err(crate::LimitpadError::Config(
            "LIMITPAD_ISIN is set but LIMITPAD_CUSTOMER_ID is missing".to_string(),
        ));
    }

    Ok(AppConfig {
        settings_path,
        api: ApiConfig {
            base_url,
            customer_id,
            isin,
        },
        log_file,
    })
}

/// Returns the value of an environment variable if it exists and is non-empty.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}
