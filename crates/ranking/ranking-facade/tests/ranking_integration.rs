//! Integration tests for the forecast engine
//!
//! Checks the report-level guarantees across many inputs.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use ranking_facade::{ForecastEngine, Observation};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 12, 30, 9, 0, 0).unwrap()
}

fn observations(url: &str, positions: &[u32]) -> Vec<Observation> {
    let start = now() - Duration::days(positions.len() as i64 + 1);
    positions
        .iter()
        .enumerate()
        .map(|(i, &p)| Observation::new(url, p, start + Duration::days(i as i64)))
        .collect()
}

/// Deterministic pseudo-random position series in 1..=100
fn wobbly_positions(seed: u64, len: usize) -> Vec<u32> {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ((state >> 33) % 100) as u32 + 1
        })
        .collect()
}

#[test]
fn test_bounds_hold_for_many_histories() {
    let engine = ForecastEngine::default();

    for seed in 0..50 {
        let len = 3 + (seed as usize % 20);
        let positions = wobbly_positions(seed, len);
        let report = engine
            .predict(&observations("u", &positions), 30, now())
            .unwrap();
        let forecast = report.get("u").unwrap();

        for point in &forecast.predictions {
            assert!(point.lower_bound >= 1, "seed {}: {:?}", seed, point);
            assert!(point.lower_bound <= point.position, "seed {}: {:?}", seed, point);
            assert!(point.position <= point.upper_bound, "seed {}: {:?}", seed, point);
        }
    }
}

#[test]
fn test_horizon_length_and_consecutive_dates() {
    let engine = ForecastEngine::default();
    let first_day = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();

    for days_ahead in [0_u32, 1, 7, 14, 45] {
        let report = engine
            .predict(&observations("u", &[8, 7, 9, 6]), days_ahead, now())
            .unwrap();
        let predictions = &report.get("u").unwrap().predictions;

        assert_eq!(predictions.len(), days_ahead as usize);
        for (i, point) in predictions.iter().enumerate() {
            assert_eq!(point.date, first_day + chrono::Days::new(i as u64));
        }
    }
}

#[test]
fn test_dates_follow_injected_now_not_history() {
    let engine = ForecastEngine::default();
    let history = observations("u", &[3, 4, 5]);
    let later = now() + Duration::days(100);

    let report = engine.predict(&history, 1, later).unwrap();

    assert_eq!(
        report.get("u").unwrap().predictions[0].date,
        later.date_naive() + chrono::Days::new(1)
    );
}

#[test]
fn test_multi_url_independence() {
    let engine = ForecastEngine::default();
    let mut input = observations("short", &[4, 5]);
    input.extend(observations("long", &[12, 11, 11, 10, 9, 9, 8, 7, 7, 6]));

    let report = engine.predict(&input, 7, now()).unwrap();

    assert_eq!(report.len(), 1);
    assert!(report.contains("long"));

    let alone = engine
        .predict(&observations("long", &[12, 11, 11, 10, 9, 9, 8, 7, 7, 6]), 7, now())
        .unwrap();
    assert_eq!(report.get("long"), alone.get("long"));
}

#[test]
fn test_interleaved_input_order_does_not_matter() {
    let engine = ForecastEngine::default();
    let mut input = observations("a", &[5, 4, 3, 2]);
    input.extend(observations("b", &[20, 25, 30]));
    let mut shuffled = input.clone();
    shuffled.reverse();

    let forward = engine.predict(&input, 7, now()).unwrap();
    let backward = engine.predict(&shuffled, 7, now()).unwrap();

    assert_eq!(forward, backward);
}

#[test]
fn test_volatility_flags() {
    let engine = ForecastEngine::default();
    let mut input = observations("jumpy", &[1, 10, 2, 9, 3]);
    input.extend(observations("steady", &[5, 6, 5, 4, 5]));

    let report = engine.predict(&input, 7, now()).unwrap();

    assert!(report.get("jumpy").unwrap().is_volatile);
    assert!(!report.get("steady").unwrap().is_volatile);
}

#[test]
fn test_current_position_is_latest_observation() {
    let engine = ForecastEngine::default();
    let t = now() - Duration::days(10);
    let input = vec![
        Observation::new("u", 2, t + Duration::days(5)),
        Observation::new("u", 9, t),
        Observation::new("u", 6, t + Duration::days(2)),
    ];

    let report = engine.predict(&input, 1, now()).unwrap();

    assert_eq!(report.get("u").unwrap().current_position, 2);
}
