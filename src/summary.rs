// Totals and display formatting for the summary tiles and top-assets table.

use serde::Deserialize;

use crate::models::{
    AssetDurations, AssetRow, MetricKind, TimeSeriesPoint, TopAsset, UsageDocument, UsageTile,
};

/// How tile totals are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileFormat {
    /// Every total rendered as "HH Hr MM Min", whatever its unit.
    #[default]
    Legacy,
    /// One formatter per metric kind.
    PerMetric,
}

/// Sum of `units` over the series; 0 for an empty series.
pub fn total(series: &[TimeSeriesPoint]) -> f64 {
    series.iter().map(|p| p.units).sum()
}

/// Seconds as "HH Hr MM Min". Leftover seconds are truncated; hours past 99 keep every digit.
/// Non-finite and negative inputs render as zero.
pub fn format_duration(seconds: f64) -> String {
    let secs = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    format!("{hours:02} Hr {minutes:02} Min")
}

/// Compact count: 950 -> "950", 1500 -> "1.5k", 2_300_000 -> "2.3M".
pub fn format_units(units: f64) -> String {
    if !units.is_finite() {
        return "0".into();
    }
    let abs = units.abs();
    let (scaled, suffix) = if abs >= 1e9 {
        (units / 1e9, "B")
    } else if abs >= 1e6 {
        (units / 1e6, "M")
    } else if abs >= 1e3 {
        (units / 1e3, "k")
    } else {
        (units, "")
    };
    format!("{}{}", trim_decimal(scaled, 1), suffix)
}

/// Fixed `places` decimals with trailing zeros and dot dropped.
fn trim_decimal(value: f64, places: usize) -> String {
    let s = format!("{value:.places$}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

pub fn format_metric(kind: MetricKind, total: f64, format: TileFormat) -> String {
    match (format, kind) {
        (TileFormat::Legacy, _) | (TileFormat::PerMetric, MetricKind::Duration) => {
            format_duration(total)
        }
        (TileFormat::PerMetric, MetricKind::Bandwidth | MetricKind::Storage) => {
            format!("{} units", format_units(total))
        }
    }
}

fn tile(kind: MetricKind, heading: &str, series: &[TimeSeriesPoint], format: TileFormat) -> UsageTile {
    let total = total(series);
    UsageTile {
        metric: kind,
        heading: heading.to_string(),
        total,
        display: format_metric(kind, total, format),
    }
}

/// Streaming, storage and transcoding tiles, in dashboard order.
pub fn usage_tiles(doc: &UsageDocument, format: TileFormat) -> Vec<UsageTile> {
    vec![
        tile(
            MetricKind::Bandwidth,
            "STREAMING USAGE",
            &doc.bandwidth_consumption,
            format,
        ),
        tile(MetricKind::Storage, "STORAGE USAGE", &doc.storage_unit, format),
        tile(
            MetricKind::Duration,
            "TRANSCODING USAGE",
            &doc.asset_duration,
            format,
        ),
    ]
}

/// Top-assets table rows; durations come from the asset_id relation, "00 Hr 00 Min" when missing.
pub fn asset_rows(assets: &[TopAsset], durations: &AssetDurations) -> Vec<AssetRow> {
    assets
        .iter()
        .map(|a| AssetRow {
            asset_id: a.asset_id.clone(),
            collection_id: a.collection_id.clone(),
            collection_name: a.collection_name.clone(),
            units: a.units,
            stream_duration: format_duration(durations.get(&a.asset_id).unwrap_or(0.0)),
        })
        .collect()
}
