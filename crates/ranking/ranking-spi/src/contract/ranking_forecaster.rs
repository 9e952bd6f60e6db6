//! Trait for turning ranking history into a forecast report

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::model::{ForecastReport, Observation};

/// Produces per-URL position forecasts from a keyword's ranking history.
///
/// `now` is the forecast origin; forecast dates start the day after it.
/// Implementations never read the wall clock themselves.
pub trait RankingForecaster: Send + Sync {
    /// Forecast `days_ahead` days for every URL with enough history.
    fn forecast(
        &self,
        observations: &[Observation],
        days_ahead: u32,
        now: DateTime<Utc>,
    ) -> Result<ForecastReport>;
}
