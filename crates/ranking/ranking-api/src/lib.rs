//! Ranking Forecast Consumer API
//!
//! Consumer configuration and entry points for ranking forecasts.
//!
//! This crate provides:
//! - A validated builder for `ForecastConfig` and JSON config loading
//! - `forecast` / `forecast_now` entry points over the default engine
//! - Re-exports from SPI and core for convenience

pub mod config;

// Re-export from core
pub use ranking_core::{
    encode_report, encoding, engine, forecast_is_volatile, grouping, projection,
    regression, report_to_json_string, volatility, ForecastEngine, LeastSquaresFitter,
};

// Re-export types and traits from SPI
pub use ranking_spi::{
    ForecastConfig, ForecastPoint, ForecastReport, Observation, RankingError, RankingForecaster,
    Result, TimeAxis, TrendEstimate, TrendFitter, UrlForecast,
};

pub use config::{config_from_json, load_config, ForecastConfigBuilder};

use chrono::{DateTime, Utc};

/// Forecast with the default configuration at an explicit origin.
pub fn forecast(
    observations: &[Observation],
    days_ahead: u32,
    now: DateTime<Utc>,
) -> Result<ForecastReport> {
    ForecastEngine::default().predict(observations, days_ahead, now)
}

/// Forecast with the default configuration from the current instant.
///
/// This is the only place the wall clock is read; use [`forecast`] when the
/// origin must be reproducible.
pub fn forecast_now(observations: &[Observation], days_ahead: u32) -> Result<ForecastReport> {
    forecast(observations, days_ahead, Utc::now())
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{config_from_json, load_config, ForecastConfigBuilder};
    pub use crate::{forecast, forecast_now};
    pub use ranking_core::{encode_report, report_to_json_string, ForecastEngine};
    pub use ranking_spi::{
        ForecastConfig, ForecastPoint, ForecastReport, Observation, RankingError,
        RankingForecaster, Result, TimeAxis, TrendEstimate, TrendFitter, UrlForecast,
    };
}
