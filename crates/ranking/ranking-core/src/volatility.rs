//! Volatility measures over observed and projected positions

use ranking_spi::ForecastPoint;

/// Standard deviation above which a projected path counts as volatile
pub const FORECAST_STD_DEV_LIMIT: f64 = 2.0;
/// Max-min spread (in positions) above which a projected path counts as volatile
pub const FORECAST_SPREAD_LIMIT: u32 = 5;

/// Population standard deviation (divides by `n`, not `n - 1`).
///
/// Returns 0.0 for an empty slice.
pub fn population_std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    variance.sqrt()
}

/// Volatility of a ranking history: standard deviation of the raw positions.
///
/// This is deliberately not detrended; a steadily climbing URL reports
/// non-zero volatility.
pub fn position_volatility(positions: &[u32]) -> f64 {
    let values: Vec<f64> = positions.iter().map(|&p| p as f64).collect();
    population_std_dev(&values)
}

/// Strictly greater than the threshold.
pub fn exceeds_threshold(volatility: f64, threshold: f64) -> bool {
    volatility > threshold
}

/// Whether a projected path swings enough to warrant an alert.
pub fn forecast_is_volatile(points: &[ForecastPoint]) -> bool {
    if points.is_empty() {
        return false;
    }
    let positions: Vec<u32> = points.iter().map(|p| p.position).collect();
    let spread = positions.iter().max().copied().unwrap_or(0)
        - positions.iter().min().copied().unwrap_or(0);

    position_volatility(&positions) > FORECAST_STD_DEV_LIMIT || spread > FORECAST_SPREAD_LIMIT
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn path(positions: &[u32]) -> Vec<ForecastPoint> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        positions
            .iter()
            .enumerate()
            .map(|(i, &position)| ForecastPoint {
                date: start + chrono::Days::new(i as u64),
                position,
                lower_bound: position,
                upper_bound: position,
            })
            .collect()
    }

    #[test]
    fn test_population_std_dev() {
        // mean 5, squared deviations 16 + 25 + 9 + 16 + 4 = 70, 70 / 5 = 14
        let sd = population_std_dev(&[1.0, 10.0, 2.0, 9.0, 3.0]);
        assert!((sd - 14.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_empty_std_dev_is_zero() {
        assert_eq!(population_std_dev(&[]), 0.0);
    }

    #[test]
    fn test_volatile_history() {
        assert!(exceeds_threshold(position_volatility(&[1, 10, 2, 9, 3]), 2.0));
    }

    #[test]
    fn test_calm_history() {
        let v = position_volatility(&[5, 6, 5, 4, 5]);
        assert!((v - 0.4_f64.sqrt()).abs() < 1e-12);
        assert!(!exceeds_threshold(v, 2.0));
    }

    #[test]
    fn test_threshold_is_strict() {
        assert!(!exceeds_threshold(2.0, 2.0));
    }

    #[test]
    fn test_flat_forecast_is_not_volatile() {
        assert!(!forecast_is_volatile(&path(&[5, 5, 5, 5, 5, 5, 5])));
        assert!(!forecast_is_volatile(&[]));
    }

    #[test]
    fn test_wide_spread_forecast_is_volatile() {
        // std dev of 1..=7 is 2.0 (not above), spread 6 is above 5
        assert!(forecast_is_volatile(&path(&[1, 2, 3, 4, 5, 6, 7])));
    }

    #[test]
    fn test_high_std_dev_forecast_is_volatile() {
        assert!(forecast_is_volatile(&path(&[1, 6, 1, 6])));
    }
}
