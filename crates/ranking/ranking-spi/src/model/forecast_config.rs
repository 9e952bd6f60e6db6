//! Forecast engine configuration model

use serde::{Deserialize, Serialize};

use crate::error::{RankingError, Result};

/// Default volatility threshold, in positions of standard deviation
pub const DEFAULT_VOLATILITY_THRESHOLD: f64 = 2.0;
/// z-score for a ~95% confidence band
pub const DEFAULT_CONFIDENCE_MULTIPLIER: f64 = 1.96;
/// Default number of forecast days
pub const DEFAULT_HORIZON_DAYS: u32 = 7;
/// URLs with fewer observations than this are left out of the report
pub const DEFAULT_MIN_OBSERVATIONS: usize = 3;

/// Independent variable used for the trend fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeAxis {
    /// Observation order `0..n-1`, treating samples as equally spaced
    #[default]
    ObservationIndex,
    /// Fractional days elapsed since the URL's first observation
    ElapsedDays,
}

/// Fixed parameters of a forecast engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// `is_volatile` is set when volatility exceeds this value
    pub volatility_threshold: f64,
    /// Standard errors on each side of the projected position
    pub confidence_multiplier: f64,
    /// Horizon used when the caller does not pass one
    pub default_horizon: u32,
    pub min_observations: usize,
    pub time_axis: TimeAxis,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            volatility_threshold: DEFAULT_VOLATILITY_THRESHOLD,
            confidence_multiplier: DEFAULT_CONFIDENCE_MULTIPLIER,
            default_horizon: DEFAULT_HORIZON_DAYS,
            min_observations: DEFAULT_MIN_OBSERVATIONS,
            time_axis: TimeAxis::ObservationIndex,
        }
    }
}

impl ForecastConfig {
    /// Check that every parameter is usable by the engine.
    pub fn validate(&self) -> Result<()> {
        if !self.volatility_threshold.is_finite() || self.volatility_threshold < 0.0 {
            return Err(RankingError::InvalidParameter {
                name: "volatility_threshold".to_string(),
                reason: "must be a finite, non-negative number".to_string(),
            });
        }
        if !self.confidence_multiplier.is_finite() || self.confidence_multiplier < 0.0 {
            return Err(RankingError::InvalidParameter {
                name: "confidence_multiplier".to_string(),
                reason: "must be a finite, non-negative number".to_string(),
            });
        }
        // Two points are the minimum for a regression line
        if self.min_observations < 2 {
            return Err(RankingError::InvalidParameter {
                name: "min_observations".to_string(),
                reason: "must be at least 2".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ForecastConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.volatility_threshold, 2.0);
        assert_eq!(config.confidence_multiplier, 1.96);
        assert_eq!(config.default_horizon, 7);
        assert_eq!(config.min_observations, 3);
        assert_eq!(config.time_axis, TimeAxis::ObservationIndex);
    }

    #[test]
    fn test_negative_threshold_rejected() {
        let config = ForecastConfig {
            volatility_threshold: -1.0,
            ..Default::default()
        };
        match config.validate() {
            Err(RankingError::InvalidParameter { name, .. }) => {
                assert_eq!(name, "volatility_threshold")
            }
            other => panic!("Expected InvalidParameter, got {:?}", other),
        }
    }

    #[test]
    fn test_nan_multiplier_rejected() {
        let config = ForecastConfig {
            confidence_multiplier: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_min_observations_below_two_rejected() {
        let config = ForecastConfig {
            min_observations: 1,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config: ForecastConfig =
            serde_json::from_str(r#"{"volatility_threshold": 3.5, "time_axis": "elapsed_days"}"#)
                .unwrap();
        assert_eq!(config.volatility_threshold, 3.5);
        assert_eq!(config.time_axis, TimeAxis::ElapsedDays);
        assert_eq!(config.confidence_multiplier, 1.96);
        assert_eq!(config.min_observations, 3);
    }
}
