use chrono::NaiveTime;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

const HOURS: u32 = 24;

/// One hourly sample
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricPoint {
    /// "HH:MM"
    pub label: String,
    pub value: u64,
}

/// A categorical count (incident breakdown)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    pub name: String,
    pub value: u64,
}

/// Headline figure with its change versus the previous window
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Score {
    pub value: f64,
    pub delta: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpsScore {
    pub otp: Score,
    pub incidents: Score,
    pub csat: Score,
}

/// Everything the performance page shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metrics {
    pub ridership: Vec<MetricPoint>,
    pub on_time: Vec<MetricPoint>,
    pub active_trips: Vec<MetricPoint>,
    pub incidents: Vec<Category>,
    pub score: OpsScore,
}

fn hour_label(hour: u32) -> String {
    NaiveTime::from_hms_opt(hour, 0, 0)
        .map(|t| t.format("%H:%M").to_string())
        .unwrap_or_default()
}

fn series(mut value_at: impl FnMut(f64) -> f64) -> Vec<MetricPoint> {
    (0..HOURS)
        .map(|h| MetricPoint {
            label: hour_label(h),
            value: value_at(h as f64).round().max(0.0) as u64,
        })
        .collect()
}

/// Generate the 24-hour mock metrics. The same seed always yields the same
/// series.
pub fn generate(seed: u64) -> Metrics {
    let mut rng = StdRng::seed_from_u64(seed);

    let ridership = series(|i| {
        let base = 100.0 + (i / 3.0).sin() * 15.0;
        (base + (rng.r#gen::<f64>() - 0.5) * 20.0).max(40.0)
    });
    let on_time = series(|i| 96.0 + (i / 4.0).sin() * 3.0);
    let active_trips = series(|i| 3.0 + (i / 5.0).sin() * 2.0 + rng.r#gen::<f64>() * 1.5);

    let incidents = [("Signal", 5), ("Vehicle", 3), ("Weather", 2), ("Other", 4)]
        .into_iter()
        .map(|(name, value)| Category {
            name: name.to_string(),
            value,
        })
        .collect();

    Metrics {
        ridership,
        on_time,
        active_trips,
        incidents,
        score: OpsScore {
            otp: Score { value: 98.5, delta: 1.2 },
            incidents: Score { value: 3.0, delta: -1.0 },
            csat: Score { value: 4.5, delta: 0.1 },
        },
    }
}
