//! Serialization boundary for forecast reports
//!
//! Every float in the report passes through [`normalize_float`] before it
//! reaches the encoder: negative zero becomes `0.0` and NaN or infinity is
//! rejected. Integers and booleans are already plain JSON types. The output
//! map is keyed in URL order, so identical reports encode to identical bytes.

use ranking_spi::{ForecastReport, RankingError, Result, UrlForecast};
use serde_json::{json, Map, Value};

/// Normalize one float for encoding; `field` names it in the error.
pub fn normalize_float(value: f64, field: &str) -> Result<f64> {
    if !value.is_finite() {
        return Err(RankingError::NonFiniteValue {
            field: field.to_string(),
        });
    }
    // -0.0 == 0.0, so this also maps negative zero to positive zero
    Ok(if value == 0.0 { 0.0 } else { value })
}

/// Encode a report as a JSON object keyed by URL.
pub fn encode_report(report: &ForecastReport) -> Result<Value> {
    let mut root = Map::new();
    for (url, forecast) in report.iter() {
        root.insert(url.to_string(), encode_url_forecast(url, forecast)?);
    }
    Ok(Value::Object(root))
}

fn encode_url_forecast(url: &str, forecast: &UrlForecast) -> Result<Value> {
    let predictions: Vec<Value> = forecast
        .predictions
        .iter()
        .map(|point| {
            json!({
                "date": point.date.format("%Y-%m-%d").to_string(),
                "position": point.position,
                "lower_bound": point.lower_bound,
                "upper_bound": point.upper_bound,
            })
        })
        .collect();

    Ok(json!({
        "current_position": forecast.current_position,
        "trend": normalize_float(forecast.trend, &format!("{}.trend", url))?,
        "volatility": normalize_float(forecast.volatility, &format!("{}.volatility", url))?,
        "is_volatile": forecast.is_volatile,
        "predictions": predictions,
    }))
}

/// Encode a report to a JSON string.
pub fn report_to_json_string(report: &ForecastReport, pretty: bool) -> Result<String> {
    let value = encode_report(report)?;
    let encoded = if pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use ranking_spi::ForecastPoint;

    fn report_with(trend: f64, volatility: f64) -> ForecastReport {
        let forecast = UrlForecast {
            current_position: 4,
            trend,
            volatility,
            is_volatile: false,
            predictions: vec![ForecastPoint {
                date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                position: 4,
                lower_bound: 3,
                upper_bound: 5,
            }],
        };
        vec![("https://a.example/".to_string(), forecast)]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_negative_zero_normalized() {
        let value = normalize_float(-0.0, "trend").unwrap();
        assert!(value.is_sign_positive());

        let json = report_to_json_string(&report_with(-0.0, 0.0), false).unwrap();
        assert!(json.contains(r#""trend":0.0"#));
        assert!(!json.contains("-0.0"));
    }

    #[test]
    fn test_non_finite_rejected() {
        let err = encode_report(&report_with(f64::NAN, 0.0)).unwrap_err();
        assert_eq!(
            err,
            RankingError::NonFiniteValue {
                field: "https://a.example/.trend".to_string()
            }
        );
        assert!(encode_report(&report_with(0.0, f64::INFINITY)).is_err());
    }

    #[test]
    fn test_encoded_shape_uses_plain_types() {
        let value = encode_report(&report_with(-0.25, 1.5)).unwrap();
        let entry = &value["https://a.example/"];

        assert!(entry["current_position"].is_u64());
        assert!(entry["trend"].is_f64());
        assert!(entry["volatility"].is_f64());
        assert!(entry["is_volatile"].is_boolean());
        let point = &entry["predictions"][0];
        assert_eq!(point["date"], "2024-01-02");
        assert!(point["position"].is_u64());
        assert!(point["lower_bound"].is_u64());
        assert!(point["upper_bound"].is_u64());
    }

    #[test]
    fn test_empty_report_encodes_to_empty_object() {
        assert_eq!(
            report_to_json_string(&ForecastReport::empty(), false).unwrap(),
            "{}"
        );
    }
}
