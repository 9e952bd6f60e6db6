//! Ranking Facade
//!
//! High-level API for ranking forecasts. Re-exports all public types from the
//! ranking stack for convenient usage.

// Re-export everything from API (which includes SPI and core)
pub use ranking_api::*;

// Explicit re-exports for documentation
pub use ranking_api::prelude;

// Re-export core modules for direct access
pub use ranking_core::{encoding, engine, grouping, projection, regression, volatility};

// Re-export SPI traits
pub use ranking_spi::{RankingForecaster, TrendFitter};
