//! Partitioning of a keyword's observations into per-URL histories

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use ranking_spi::{Observation, TimeAxis};

const MS_IN_DAY: f64 = 86_400_000.0;

/// One URL's observations in chronological order.
#[derive(Debug, Clone, PartialEq)]
pub struct UrlHistory {
    pub url: String,
    /// `(timestamp, position)` sorted by timestamp; ties keep input order
    pub samples: Vec<(DateTime<Utc>, u32)>,
}

impl UrlHistory {
    pub fn positions(&self) -> Vec<u32> {
        self.samples.iter().map(|&(_, position)| position).collect()
    }

    /// Position of the most recent sample.
    pub fn current_position(&self) -> Option<u32> {
        self.samples.last().map(|&(_, position)| position)
    }

    /// Independent variable for each sample on the given axis.
    pub fn axis_values(&self, axis: TimeAxis) -> Vec<f64> {
        match axis {
            TimeAxis::ObservationIndex => (0..self.samples.len()).map(|i| i as f64).collect(),
            TimeAxis::ElapsedDays => {
                let Some(&(start, _)) = self.samples.first() else {
                    return Vec::new();
                };
                self.samples
                    .iter()
                    .map(|&(ts, _)| elapsed_days(start, ts))
                    .collect()
            }
        }
    }

    /// Axis value that forecast day 0 corresponds to.
    ///
    /// On the index axis this is the last sample. On the elapsed axis it is
    /// `now`, so forecast day `d` lands on the same instant as its date.
    pub fn forecast_origin(&self, axis: TimeAxis, now: DateTime<Utc>) -> f64 {
        match axis {
            TimeAxis::ObservationIndex => self.samples.len().saturating_sub(1) as f64,
            TimeAxis::ElapsedDays => self
                .samples
                .first()
                .map_or(0.0, |&(start, _)| elapsed_days(start, now)),
        }
    }
}

fn elapsed_days(start: DateTime<Utc>, ts: DateTime<Utc>) -> f64 {
    (ts - start).num_milliseconds() as f64 / MS_IN_DAY
}

/// Group observations by URL, each group stably sorted by timestamp.
///
/// Histories come back in URL order.
pub fn group_by_url(observations: &[Observation]) -> Vec<UrlHistory> {
    let mut groups: BTreeMap<&str, Vec<(DateTime<Utc>, u32)>> = BTreeMap::new();
    for obs in observations {
        groups
            .entry(obs.url.as_str())
            .or_default()
            .push((obs.timestamp, obs.position));
    }

    groups
        .into_iter()
        .map(|(url, mut samples)| {
            // sort_by_key is stable, so equal timestamps keep their input order
            samples.sort_by_key(|&(ts, _)| ts);
            UrlHistory {
                url: url.to_string(),
                samples,
            }
        })
        .collect()
}
