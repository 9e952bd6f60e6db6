//! Contract module containing trait definitions for ranking forecasts

mod ranking_forecaster;
mod trend_fitter;

pub use ranking_forecaster::RankingForecaster;
pub use trend_fitter::TrendFitter;
