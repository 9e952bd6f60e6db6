//! Error module containing error types and result aliases

mod ranking_error;

pub use ranking_error::RankingError;

/// Result type for ranking forecast operations
pub type Result<T> = std::result::Result<T, RankingError>;
