//! Ranking Forecast Core
//!
//! Core implementations for ranking history forecasting: per-URL grouping,
//! least-squares trend fitting, volatility measures, forward projection with
//! confidence bands, the forecast engine and the JSON encoding boundary.

pub mod encoding;
pub mod engine;
pub mod grouping;
pub mod projection;
pub mod regression;
pub mod volatility;

// Re-export SPI types for implementations
pub use ranking_spi::{
    ForecastConfig, ForecastPoint, ForecastReport, Observation, RankingError, RankingForecaster,
    Result, TimeAxis, TrendEstimate, TrendFitter, UrlForecast,
};

// Re-export main types
pub use encoding::{encode_report, report_to_json_string};
pub use engine::ForecastEngine;
pub use grouping::{group_by_url, UrlHistory};
pub use regression::{fit_trend, LeastSquaresFitter};
pub use volatility::forecast_is_volatile;
