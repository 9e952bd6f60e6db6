//! Ranking forecast error types

use thiserror::Error;

/// Errors that can occur while fitting, projecting or encoding ranking forecasts.
///
/// A URL with too little history is not an error for the engine; it is simply
/// left out of the report. `InsufficientData` is only returned when a fitter
/// is called directly with fewer than two samples.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RankingError {
    /// Insufficient samples for a regression fit
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// The independent variable has zero variance, so the fit is undefined
    #[error("Degenerate input: {reason}")]
    DegenerateInput { reason: String },

    /// Invalid configuration value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// A float reached the serialization boundary as NaN or infinity
    #[error("Non-finite value in field '{field}'")]
    NonFiniteValue { field: String },

    /// JSON encoding failure
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for RankingError {
    fn from(err: serde_json::Error) -> Self {
        RankingError::Serialization(err.to_string())
    }
}
