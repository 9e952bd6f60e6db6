//! Forecast report model

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::UrlForecast;

/// Mapping from URL to its forecast.
///
/// Built once per forecast call and never mutated afterwards. Entries are kept
/// in URL order so that serializing the same report always yields the same bytes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ForecastReport {
    entries: BTreeMap<String, UrlForecast>,
}

impl ForecastReport {
    /// Create an empty report.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Look up the forecast for a URL.
    pub fn get(&self, url: &str) -> Option<&UrlForecast> {
        self.entries.get(url)
    }

    pub fn contains(&self, url: &str) -> bool {
        self.entries.contains_key(url)
    }

    /// Number of URLs with a forecast.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(url, forecast)` pairs in URL order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &UrlForecast)> {
        self.entries.iter().map(|(url, forecast)| (url.as_str(), forecast))
    }
}

impl FromIterator<(String, UrlForecast)> for ForecastReport {
    fn from_iter<I: IntoIterator<Item = (String, UrlForecast)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ForecastReport {
    type Item = (String, UrlForecast);
    type IntoIter = std::collections::btree_map::IntoIter<String, UrlForecast>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
