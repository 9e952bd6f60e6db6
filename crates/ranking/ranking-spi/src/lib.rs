//! Ranking Forecast Service Provider Interface
//!
//! Defines the ranking history model, the error taxonomy and the traits
//! implemented by trend fitters and forecasters.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{RankingForecaster, TrendFitter};
pub use error::{RankingError, Result};
pub use model::{
    ForecastConfig, ForecastPoint, ForecastReport, Observation, TimeAxis, TrendEstimate,
    UrlForecast, DEFAULT_CONFIDENCE_MULTIPLIER, DEFAULT_HORIZON_DAYS, DEFAULT_MIN_OBSERVATIONS,
    DEFAULT_VOLATILITY_THRESHOLD,
};
