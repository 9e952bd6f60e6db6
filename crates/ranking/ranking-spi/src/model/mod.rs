//! Model module containing data structures

mod forecast_config;
mod forecast_point;
mod forecast_report;
mod observation;
mod trend_estimate;
mod url_forecast;

pub use forecast_config::{
    ForecastConfig, TimeAxis, DEFAULT_CONFIDENCE_MULTIPLIER, DEFAULT_HORIZON_DAYS,
    DEFAULT_MIN_OBSERVATIONS, DEFAULT_VOLATILITY_THRESHOLD,
};
pub use forecast_point::ForecastPoint;
pub use forecast_report::ForecastReport;
pub use observation::Observation;
pub use trend_estimate::TrendEstimate;
pub use url_forecast::UrlForecast;
