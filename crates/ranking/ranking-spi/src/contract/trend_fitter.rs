//! Trait for fitting a linear trend to paired samples

use crate::error::Result;
use crate::model::TrendEstimate;

/// Fits `y = intercept + slope * x` over paired samples.
///
/// Implementations must be pure: the same samples always yield the same
/// estimate, and no state is carried between calls.
pub trait TrendFitter: Send + Sync {
    /// Fit a trend over `xs` (independent) and `ys` (dependent).
    ///
    /// Both slices have the same length.
    fn fit(&self, xs: &[f64], ys: &[f64]) -> Result<TrendEstimate>;
}
