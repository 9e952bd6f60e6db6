//! Per-URL forecast model

use serde::{Deserialize, Serialize};

use super::ForecastPoint;

/// Trend, volatility and projected positions for one URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlForecast {
    /// Position of the most recent observation
    pub current_position: u32,
    /// Fitted slope (positions per step)
    pub trend: f64,
    /// Population standard deviation of the observed positions
    pub volatility: f64,
    pub is_volatile: bool,
    /// One point per forecast day, in date order
    pub predictions: Vec<ForecastPoint>,
}

impl UrlForecast {
    /// `true` when the fitted trend points towards better (lower) ranks.
    pub fn is_improving(&self) -> bool {
        self.trend < 0.0
    }
}
