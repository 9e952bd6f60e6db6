//! Forward projection of a fitted trend into dated, bounded forecast points

use chrono::{Days, NaiveDate};
use ranking_spi::{ForecastPoint, TrendEstimate};

/// Round to the nearest rank, halves away from zero, never below 1.
pub fn round_rank(value: f64) -> u32 {
    let rounded = value.round();
    if rounded.is_nan() || rounded < 1.0 {
        1
    } else if rounded >= u32::MAX as f64 {
        u32::MAX
    } else {
        rounded as u32
    }
}

/// Project `trend` for `days_ahead` days after `origin`.
///
/// `x_origin` is the axis value of `origin`; day `d` is evaluated at
/// `x_origin + d`. The band is `standard_error * confidence_multiplier`
/// wide on each side of the rounded position, so
/// `1 <= lower_bound <= position <= upper_bound` always holds.
pub fn project(
    trend: &TrendEstimate,
    x_origin: f64,
    days_ahead: u32,
    confidence_multiplier: f64,
    origin: NaiveDate,
) -> Vec<ForecastPoint> {
    let half_width = (trend.standard_error * confidence_multiplier).abs();

    (1..=days_ahead)
        .map(|day| {
            let position = round_rank(trend.value_at(x_origin + day as f64));
            let lower_bound = round_rank(position as f64 - half_width);
            let upper_bound = round_rank(position as f64 + half_width).max(position);

            ForecastPoint {
                date: forecast_date(origin, day),
                position,
                lower_bound,
                upper_bound,
            }
        })
        .collect()
}

fn forecast_date(origin: NaiveDate, day: u32) -> NaiveDate {
    origin
        .checked_add_days(Days::new(day as u64))
        .unwrap_or(NaiveDate::MAX)
}
