//! Response envelope and text summary for forecast reports

use ranking_facade::{encode_report, forecast_is_volatile, ForecastReport};
use serde::Serialize;

use crate::CliResult;

pub const NO_DATA_MESSAGE: &str =
    "No historical ranking data available for predictions. Try fetching rankings first.";

/// What the `forecast` command prints.
#[derive(Debug, Serialize)]
pub struct ForecastResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    pub days_analyzed: Option<u32>,
    pub predictions: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ForecastResponse {
    /// Wrap a report; an empty report carries the no-data message.
    pub fn new(
        report: &ForecastReport,
        keyword: Option<String>,
        days_analyzed: Option<u32>,
    ) -> CliResult<Self> {
        let predictions = encode_report(report).map_err(|e| e.to_string())?;
        let message = report.is_empty().then(|| NO_DATA_MESSAGE.to_string());
        Ok(Self {
            keyword,
            days_analyzed,
            predictions,
            message,
        })
    }
}

/// One line per URL: current rank, trend, volatility and alert flags.
pub fn summary_lines(report: &ForecastReport) -> Vec<String> {
    if report.is_empty() {
        return vec![NO_DATA_MESSAGE.to_string()];
    }

    report
        .iter()
        .map(|(url, forecast)| {
            let direction = if forecast.is_improving() {
                "improving"
            } else if forecast.trend > 0.0 {
                "declining"
            } else {
                "flat"
            };
            let mut flags = Vec::new();
            if forecast.is_volatile {
                flags.push("volatile-history");
            }
            if forecast_is_volatile(&forecast.predictions) {
                flags.push("volatile-forecast");
            }
            let last = forecast
                .predictions
                .last()
                .map(|p| format!("#{} on {} [{}-{}]", p.position, p.date, p.lower_bound, p.upper_bound))
                .unwrap_or_else(|| "-".to_string());

            format!(
                "{}  now #{}  trend {:+.3}/step ({})  volatility {:.3}  horizon {}  {}",
                url,
                forecast.current_position,
                forecast.trend,
                direction,
                forecast.volatility,
                last,
                flags.join(",")
            )
            .trim_end()
            .to_string()
        })
        .collect()
}
