//! Least-squares trend model

use serde::{Deserialize, Serialize};

/// Result of fitting `position = intercept + slope * x` over one URL's history.
///
/// `standard_error` is the standard error of the slope estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendEstimate {
    /// Change in position per unit of x (negative = improving rank)
    pub slope: f64,
    /// Fitted position at x = 0
    pub intercept: f64,
    /// Standard error of the slope
    pub standard_error: f64,
}

impl TrendEstimate {
    /// Evaluate the fitted line at `x`.
    pub fn value_at(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}
