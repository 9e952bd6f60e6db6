//! Ranking forecast engine
//!
//! Turns a keyword's ranking history into a [`ForecastReport`]: group by URL,
//! fit a least-squares trend per URL, measure volatility, project forward.
//! URLs are independent; one URL failing to fit never affects another.

use chrono::{DateTime, Utc};
use ranking_spi::{
    ForecastConfig, ForecastReport, Observation, RankingError, RankingForecaster, Result,
    TrendFitter, UrlForecast,
};

use crate::grouping::{group_by_url, UrlHistory};
use crate::projection::project;
use crate::regression::LeastSquaresFitter;
use crate::volatility::{exceeds_threshold, position_volatility};

/// Stateless forecaster over ranking observations.
///
/// Holds only immutable configuration, so one engine can serve concurrent
/// callers.
#[derive(Debug, Clone)]
pub struct ForecastEngine<F: TrendFitter = LeastSquaresFitter> {
    config: ForecastConfig,
    fitter: F,
}

impl ForecastEngine<LeastSquaresFitter> {
    /// Engine with the given configuration and the least-squares fitter.
    pub fn new(config: ForecastConfig) -> Result<Self> {
        Self::with_fitter(config, LeastSquaresFitter)
    }
}

impl Default for ForecastEngine<LeastSquaresFitter> {
    fn default() -> Self {
        Self {
            config: ForecastConfig::default(),
            fitter: LeastSquaresFitter,
        }
    }
}

impl<F: TrendFitter> ForecastEngine<F> {
    /// Engine with a custom trend fitter.
    pub fn with_fitter(config: ForecastConfig, fitter: F) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, fitter })
    }

    /// Forecast every URL with enough history, using the configured default horizon.
    pub fn predict_default(
        &self,
        observations: &[Observation],
        now: DateTime<Utc>,
    ) -> Result<ForecastReport> {
        self.predict(observations, self.config.default_horizon, now)
    }

    /// Forecast `days_ahead` days for every URL with enough history.
    ///
    /// URLs with fewer than `min_observations` samples are left out. A URL
    /// whose fit is degenerate is skipped with a warning. Empty input gives
    /// an empty report.
    pub fn predict(
        &self,
        observations: &[Observation],
        days_ahead: u32,
        now: DateTime<Utc>,
    ) -> Result<ForecastReport> {
        let mut entries = Vec::new();

        for history in group_by_url(observations) {
            if history.samples.len() < self.config.min_observations {
                tracing::debug!(
                    url = %history.url,
                    observations = history.samples.len(),
                    required = self.config.min_observations,
                    "not enough history, skipping"
                );
                continue;
            }

            match self.forecast_url(&history, days_ahead, now) {
                Ok(forecast) => entries.push((history.url, forecast)),
                Err(RankingError::DegenerateInput { reason }) => {
                    tracing::warn!(url = %history.url, %reason, "trend fit failed, skipping");
                }
                Err(err) => return Err(err),
            }
        }

        tracing::debug!(
            urls = entries.len(),
            observations = observations.len(),
            "forecast complete"
        );
        Ok(entries.into_iter().collect())
    }

    fn forecast_url(
        &self,
        history: &UrlHistory,
        days_ahead: u32,
        now: DateTime<Utc>,
    ) -> Result<UrlForecast> {
        let positions = history.positions();
        let ys: Vec<f64> = positions.iter().map(|&p| p as f64).collect();
        let xs = history.axis_values(self.config.time_axis);

        let trend = self.fitter.fit(&xs, &ys)?;
        let volatility = position_volatility(&positions);

        let x_origin = history.forecast_origin(self.config.time_axis, now);
        let predictions = project(
            &trend,
            x_origin,
            days_ahead,
            self.config.confidence_multiplier,
            now.date_naive(),
        );

        let current_position = history.current_position().ok_or(RankingError::InsufficientData {
            required: self.config.min_observations,
            actual: 0,
        })?;

        Ok(UrlForecast {
            current_position,
            trend: trend.slope,
            volatility,
            is_volatile: exceeds_threshold(volatility, self.config.volatility_threshold),
            predictions,
        })
    }
}

impl<F: TrendFitter> RankingForecaster for ForecastEngine<F> {
    fn forecast(
        &self,
        observations: &[Observation],
        days_ahead: u32,
        now: DateTime<Utc>,
    ) -> Result<ForecastReport> {
        self.predict(observations, days_ahead, now)
    }
}
