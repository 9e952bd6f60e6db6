//! Ranking observation model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One measured rank of a URL for a keyword at a point in time.
///
/// Positions are 1-based: rank 1 is the top result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    /// Ranked page URL
    pub url: String,
    /// Rank position (>= 1)
    pub position: u32,
    /// When the rank was measured
    pub timestamp: DateTime<Utc>,
}

impl Observation {
    /// Create a new observation.
    pub fn new(url: impl Into<String>, position: u32, timestamp: DateTime<Utc>) -> Self {
        Self {
            url: url.into(),
            position,
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_observation_new() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let obs = Observation::new("https://example.com/a", 4, ts);

        assert_eq!(obs.url, "https://example.com/a");
        assert_eq!(obs.position, 4);
        assert_eq!(obs.timestamp, ts);
    }

    #[test]
    fn test_observation_deserializes_rfc3339_timestamp() {
        let json = r#"{"url":"https://example.com/a","position":7,"timestamp":"2024-03-01T12:00:00Z"}"#;
        let obs: Observation = serde_json::from_str(json).unwrap();

        assert_eq!(obs.position, 7);
        assert_eq!(
            obs.timestamp,
            Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
        );
    }
}
