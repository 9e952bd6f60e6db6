//! Forecast configuration builder and loading.

use std::fs;
use std::path::Path;

use ranking_spi::{ForecastConfig, RankingError, Result, TimeAxis};

/// Builder for ForecastConfig.
///
/// Unset fields keep their defaults; `build` validates the result.
#[derive(Debug, Default)]
pub struct ForecastConfigBuilder {
    volatility_threshold: Option<f64>,
    confidence_multiplier: Option<f64>,
    default_horizon: Option<u32>,
    min_observations: Option<usize>,
    time_axis: Option<TimeAxis>,
}

impl ForecastConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the volatility threshold (standard deviation, in positions).
    pub fn volatility_threshold(mut self, threshold: f64) -> Self {
        self.volatility_threshold = Some(threshold);
        self
    }

    /// Set the confidence multiplier (z-score).
    pub fn confidence_multiplier(mut self, multiplier: f64) -> Self {
        self.confidence_multiplier = Some(multiplier);
        self
    }

    /// Set the confidence multiplier from a confidence level.
    ///
    /// Levels between the listed ones round down to the nearest tabulated z-score.
    pub fn confidence_level(self, level: f64) -> Self {
        self.confidence_multiplier(z_score(level))
    }

    /// Set the horizon used when none is passed.
    pub fn default_horizon(mut self, days: u32) -> Self {
        self.default_horizon = Some(days);
        self
    }

    /// Set the minimum observations per URL.
    pub fn min_observations(mut self, count: usize) -> Self {
        self.min_observations = Some(count);
        self
    }

    /// Set the regression axis.
    pub fn time_axis(mut self, axis: TimeAxis) -> Self {
        self.time_axis = Some(axis);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> Result<ForecastConfig> {
        let defaults = ForecastConfig::default();
        let config = ForecastConfig {
            volatility_threshold: self
                .volatility_threshold
                .unwrap_or(defaults.volatility_threshold),
            confidence_multiplier: self
                .confidence_multiplier
                .unwrap_or(defaults.confidence_multiplier),
            default_horizon: self.default_horizon.unwrap_or(defaults.default_horizon),
            min_observations: self.min_observations.unwrap_or(defaults.min_observations),
            time_axis: self.time_axis.unwrap_or(defaults.time_axis),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Parse and validate a configuration from JSON. Missing fields take defaults.
pub fn config_from_json(json: &str) -> Result<ForecastConfig> {
    let config: ForecastConfig = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
}

/// Load and validate a configuration from a JSON file.
pub fn load_config(path: &Path) -> Result<ForecastConfig> {
    let json = fs::read_to_string(path).map_err(|e| RankingError::InvalidParameter {
        name: "config".to_string(),
        reason: format!("failed to read {}: {}", path.display(), e),
    })?;
    config_from_json(&json)
}

/// Get z-score for a given confidence level
fn z_score(confidence_level: f64) -> f64 {
    match confidence_level {
        x if x >= 0.99 => 2.576,
        x if x >= 0.95 => 1.96,
        x if x >= 0.90 => 1.645,
        x if x >= 0.80 => 1.282,
        _ => 1.96, // default to 95%
    }
}
