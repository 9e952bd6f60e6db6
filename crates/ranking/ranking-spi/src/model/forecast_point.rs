//! Single-day forecast model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Projected position for one calendar day with its confidence bounds.
///
/// `date` serializes as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub position: u32,
    pub lower_bound: u32,
    pub upper_bound: u32,
}
