//! Loading ranking history from CSV or JSON and applying store-side filters

use std::fs;
use std::io::Read;
use std::path::Path;

use chrono::{DateTime, Duration, NaiveDateTime, TimeZone, Utc};
use ranking_facade::Observation;
use serde::{Deserialize, Deserializer};

use crate::CliResult;

/// One stored ranking row. `keyword` is optional so single-keyword exports load too.
#[derive(Debug, Clone, Deserialize)]
pub struct RankingRecord {
    #[serde(default)]
    pub keyword: Option<String>,
    pub url: String,
    pub position: u32,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: DateTime<Utc>,
}

/// Parse RFC 3339, or an ISO-8601 timestamp without offset taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| Utc.from_utc_datetime(&naive))
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {}", raw)))
}

impl RankingRecord {
    fn into_observation(self) -> Observation {
        Observation::new(self.url, self.position, self.timestamp)
    }
}

/// Which stored rows to hand to the engine.
#[derive(Debug, Clone, Default)]
pub struct RankingQuery {
    pub keyword: Option<String>,
    /// Keep only rows from the last N days before `now`
    pub lookback_days: Option<u32>,
}

impl RankingQuery {
    /// Filter rows and convert them to observations.
    pub fn apply(&self, records: Vec<RankingRecord>, now: DateTime<Utc>) -> Vec<Observation> {
        let since = self
            .lookback_days
            .map(|days| now - Duration::days(days as i64));

        records
            .into_iter()
            .filter(|r| match (&self.keyword, &r.keyword) {
                (Some(wanted), Some(kw)) => wanted.eq_ignore_ascii_case(kw),
                (Some(_), None) => false,
                (None, _) => true,
            })
            .filter(|r| since.map_or(true, |since| r.timestamp >= since))
            .map(RankingRecord::into_observation)
            .collect()
    }
}

fn validate(records: Vec<RankingRecord>) -> CliResult<Vec<RankingRecord>> {
    if let Some(bad) = records.iter().find(|r| r.position == 0) {
        return Err(format!(
            "Invalid position 0 for {} at {}: ranks start at 1",
            bad.url, bad.timestamp
        ));
    }
    Ok(records)
}

/// Parse CSV with a header row containing `url`, `position`, `timestamp` and optionally `keyword`.
pub fn parse_csv<R: Read>(reader: R) -> CliResult<Vec<RankingRecord>> {
    let mut reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    for result in reader.deserialize() {
        let record: RankingRecord =
            result.map_err(|e| format!("Failed to read record: {}", e))?;
        records.push(record);
    }
    validate(records)
}

/// Parse JSON: either an array of rows or an object with a `rankings` array.
pub fn parse_json<R: Read>(reader: R) -> CliResult<Vec<RankingRecord>> {
    let json: serde_json::Value =
        serde_json::from_reader(reader).map_err(|e| format!("Failed to parse JSON: {}", e))?;

    let rows = match json {
        serde_json::Value::Array(_) => json,
        serde_json::Value::Object(mut obj) => obj
            .remove("rankings")
            .ok_or_else(|| "JSON object has no \"rankings\" array".to_string())?,
        _ => return Err("Expected a JSON array of rankings".to_string()),
    };

    let records: Vec<RankingRecord> =
        serde_json::from_value(rows).map_err(|e| format!("Invalid ranking row: {}", e))?;
    validate(records)
}

/// Load rows from file. The extension picks the format; otherwise content
/// starting with `[` or `{` is JSON and anything else is CSV.
pub fn load_records(path: &Path) -> CliResult<Vec<RankingRecord>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let content = fs::read_to_string(path).map_err(|e| format!("Failed to open file: {}", e))?;

    match ext.as_str() {
        "csv" => parse_csv(content.as_bytes()),
        "json" => parse_json(content.as_bytes()),
        _ if content.trim_start().starts_with(['[', '{']) => parse_json(content.as_bytes()),
        _ => parse_csv(content.as_bytes()),
    }
}
