// Shared test helpers
#![allow(dead_code)]

use usage_dashboard::models::*;
use usage_dashboard::provider::UsageProvider;

/// Timestamp of the first daily point in the built-in sample (2022-08-01).
pub const SAMPLE_FIRST_TS: i64 = 1_659_312_000;
/// Timestamp of the last daily point in the built-in sample (2022-08-15).
pub const SAMPLE_LAST_TS: i64 = 1_660_521_600;
/// A clock long after the sample data.
pub const FAR_FUTURE: i64 = 1_900_000_000;

pub fn point(units: f64, timestamp: i64) -> TimeSeriesPoint {
    TimeSeriesPoint { units, timestamp }
}

pub fn asset(asset_id: &str, units: f64) -> TopAsset {
    TopAsset {
        collection_id: "c1".into(),
        asset_id: asset_id.into(),
        units,
        collection_name: "Demo".into(),
    }
}

pub fn sample_provider() -> UsageProvider {
    UsageProvider::sample().expect("built-in sample parses")
}

pub fn sample_document() -> UsageDocument {
    sample_provider().document().clone()
}

/// Small document: one point per day for `days` days ending at `end`, same values in all three series.
pub fn daily_document(end: i64, days: i64) -> UsageDocument {
    let series: Vec<TimeSeriesPoint> = (0..days)
        .rev()
        .map(|i| point((days - i) as f64, end - i * 86_400))
        .collect();
    UsageDocument {
        bandwidth_consumption: series.clone(),
        top_assets: Some(vec![asset("a1", 10.0), asset("a2", 5.0)]),
        asset_duration: series.clone(),
        storage_unit: series,
    }
}
