//! Process-level configuration.
//!
//! Read once at startup (after loading `.env`) and passed down explicitly:
//!
//! - `TRENDS_CURRENT_YEAR`: pin the year used by month labels (defaults to the wall clock)
//! - `TRENDS_LOG`: log filter when `RUST_LOG` is unset (default `warn`)
//! - `TRENDS_LOG_FORMAT`: `pretty` or `json`

pub mod logging;

pub use logging::LoggingConfig;

use crate::calendar::{Clock, FixedClock, SystemClock};
use crate::error::AppError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub current_year: Option<i32>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup (the process environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let mut config = Self::default();

        if let Some(level) = lookup("TRENDS_LOG").filter(|v| !v.trim().is_empty()) {
            config.logging.level = level.trim().to_string();
        }
        if let Some(format) = lookup("TRENDS_LOG_FORMAT") {
            let format = format.trim().to_ascii_lowercase();
            if format != "json" && format != "pretty" {
                return Err(AppError::input(format!(
                    "TRENDS_LOG_FORMAT must be 'pretty' or 'json', got '{format}'."
                )));
            }
            config.logging.format = format;
        }
        if let Some(raw) = lookup("TRENDS_CURRENT_YEAR").filter(|v| !v.trim().is_empty()) {
            let year: i32 = raw
                .trim()
                .parse()
                .map_err(|_| AppError::input(format!("TRENDS_CURRENT_YEAR must be a year, got '{raw}'.")))?;
            config.current_year = Some(year);
        }

        Ok(config)
    }

    /// Clock for label rendering: pinned when `TRENDS_CURRENT_YEAR` is set.
    pub fn clock(&self) -> Box<dyn Clock> {
        match self.current_year.and_then(FixedClock::at_year) {
            Some(fixed) => Box::new(fixed),
            None => Box::new(SystemClock),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_variables() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn current_year_pins_the_clock() {
        let config = AppConfig::from_lookup(lookup(&[("TRENDS_CURRENT_YEAR", " 2022 ")])).unwrap();
        assert_eq!(config.current_year, Some(2022));
        assert_eq!(config.clock().current_year(), 2022);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(AppConfig::from_lookup(lookup(&[("TRENDS_CURRENT_YEAR", "next")])).is_err());
        assert!(AppConfig::from_lookup(lookup(&[("TRENDS_LOG_FORMAT", "xml")])).is_err());
    }

    #[test]
    fn log_settings_are_read() {
        let config = AppConfig::from_lookup(lookup(&[("TRENDS_LOG", "debug"), ("TRENDS_LOG_FORMAT", "JSON")])).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
    }
}
