//! TOML configuration for the `taxdesk` command line.
//!
//! Every field is defaulted, so a file only needs the values it overrides:
//!
//! ```toml
//! [limits]
//! section_80c_cap = 150000
//!
//! [limits.savings_interest]
//! senior_age = 60
//!
//! [statistics]
//! upcoming_window_days = 7
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use taxdesk_core::calculations::{DeductionEngine, DeductionLimits, DeductionLimitsError};
use taxdesk_core::statistics::{DEFAULT_UPCOMING_WINDOW_DAYS, StatisticsAggregator};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config '{path}': {message}")]
    Io { path: String, message: String },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid deduction limits: {0}")]
    Invalid(#[from] DeductionLimitsError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatisticsConfig {
    pub upcoming_window_days: u32,
}

impl Default for StatisticsConfig {
    fn default() -> Self {
        Self {
            upcoming_window_days: DEFAULT_UPCOMING_WINDOW_DAYS,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub limits: DeductionLimits,
    pub statistics: StatisticsConfig,
}

impl AppConfig {
    /// Parses and validates configuration text.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.limits.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&text)
    }

    pub fn engine(&self) -> Result<DeductionEngine, ConfigError> {
        Ok(DeductionEngine::new(self.limits.clone())?)
    }

    pub fn aggregator(&self) -> StatisticsAggregator {
        StatisticsAggregator::new(self.statistics.upcoming_window_days)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn empty_config_uses_statutory_defaults() {
        let config = AppConfig::from_toml_str("").expect("valid config");

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.limits, DeductionLimits::statutory());
        assert_eq!(config.statistics.upcoming_window_days, 7);
    }

    #[test]
    fn partial_config_overrides_named_fields_only() {
        let config = AppConfig::from_toml_str(
            r#"
            [limits]
            section_80c_cap = 200000

            [limits.section_80d]
            preventive_checkup_cap = 7500

            [limits.hra]
            metro_rate = "0.45"

            [statistics]
            upcoming_window_days = 14
            "#,
        )
        .expect("valid config");

        assert_eq!(config.limits.section_80c_cap, dec!(200000));
        assert_eq!(config.limits.section_80d.preventive_checkup_cap, dec!(7500));
        assert_eq!(config.limits.section_80d.self_cap, dec!(25000));
        assert_eq!(config.limits.hra.metro_rate, dec!(0.45));
        assert_eq!(config.limits.hra.non_metro_rate, dec!(0.40));
        assert_eq!(config.limits.home_loan_interest_cap, dec!(200000));
        assert_eq!(config.aggregator().upcoming_window_days(), 14);
    }

    #[test]
    fn invalid_limits_are_rejected() {
        let result = AppConfig::from_toml_str(
            r#"
            [limits]
            nps_additional_cap = -5
            "#,
        );

        assert!(matches!(
            result,
            Err(ConfigError::Invalid(DeductionLimitsError::NegativeCap {
                name: "nps_additional_cap",
                ..
            }))
        ));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let result = AppConfig::from_toml_str("[limits\nsection_80c_cap = 1");

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn engine_applies_configured_limits() {
        let config = AppConfig::from_toml_str("[limits]\nhome_loan_interest_cap = 150000\n")
            .expect("valid config");

        let engine = config.engine().expect("valid engine");

        assert_eq!(engine.home_loan_interest(dec!(180000)), dec!(150000));
    }
}
