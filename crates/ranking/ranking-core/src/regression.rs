//! Ordinary least-squares trend fitting
//!
//! Fits `y = intercept + slope * x` and reports the standard error of the
//! slope, using the same closed form as two-variable linear regression:
//!
//! - `slope = Sxy / Sxx`
//! - `intercept = mean(y) - slope * mean(x)`
//! - `standard_error = sqrt(SSR / (n - 2) / Sxx)` for `n > 2`, `0` for `n = 2`
//!
//! Sums are taken over centered values, which keeps the fit stable when `x`
//! is a large elapsed-time offset rather than a small index.

use ranking_spi::{RankingError, Result, TrendEstimate, TrendFitter};

/// Stateless least-squares fitter.
///
/// Every call fits from scratch; nothing from a previous fit is kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeastSquaresFitter;

impl LeastSquaresFitter {
    pub fn new() -> Self {
        Self
    }
}

impl TrendFitter for LeastSquaresFitter {
    fn fit(&self, xs: &[f64], ys: &[f64]) -> Result<TrendEstimate> {
        fit_trend(xs, ys)
    }
}

/// Fit a least-squares line through `(xs[i], ys[i])`.
pub fn fit_trend(xs: &[f64], ys: &[f64]) -> Result<TrendEstimate> {
    if xs.len() != ys.len() {
        return Err(RankingError::InvalidParameter {
            name: "xs".to_string(),
            reason: format!("length {} does not match ys length {}", xs.len(), ys.len()),
        });
    }
    if xs.len() < 2 {
        return Err(RankingError::InsufficientData {
            required: 2,
            actual: xs.len(),
        });
    }

    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for (&x, &y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        sxx += dx * dx;
        sxy += dx * (y - mean_y);
    }

    if sxx <= 0.0 || !sxx.is_finite() {
        return Err(RankingError::DegenerateInput {
            reason: "independent variable has zero variance".to_string(),
        });
    }

    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;

    let standard_error = if xs.len() > 2 {
        let ssr: f64 = xs
            .iter()
            .zip(ys)
            .map(|(&x, &y)| {
                let residual = y - (intercept + slope * x);
                residual * residual
            })
            .sum();
        (ssr.max(0.0) / (n - 2.0) / sxx).sqrt()
    } else {
        0.0
    };

    Ok(TrendEstimate {
        slope,
        intercept,
        standard_error,
    })
}
