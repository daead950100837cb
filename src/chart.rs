// Chart datasets for the three usage charts, plus the y-axis tick format.

use crate::models::{ChartData, ChartKind, TimeSeriesPoint, UsageDocument};

fn chart(id: &str, title: &str, kind: ChartKind, label: &str, series: &[TimeSeriesPoint]) -> ChartData {
    ChartData {
        id: id.to_string(),
        title: title.to_string(),
        kind,
        label: label.to_string(),
        labels: (1..=series.len()).collect(),
        data: series.iter().map(|p| p.units).collect(),
        tick_labels: series.iter().map(|p| tick_label(p.units)).collect(),
    }
}

/// Streaming (line), transcoding (line) and storage (bar) charts. Each chart is labelled from its own series length.
pub fn usage_charts(doc: &UsageDocument) -> Vec<ChartData> {
    vec![
        chart(
            "streamingChart",
            "Streaming Usage",
            ChartKind::Line,
            "Streaming Usage (sec)",
            &doc.bandwidth_consumption,
        ),
        chart(
            "transcodingChart",
            "Transcoding Usage",
            ChartKind::Line,
            "Transcoding Usage (sec)",
            &doc.asset_duration,
        ),
        chart(
            "storageChart",
            "Storage Usage",
            ChartKind::Bar,
            "Storage Usage (sec)",
            &doc.storage_unit,
        ),
    ]
}

/// Y-axis tick: values >= 1000 as thousands with a "k" suffix, otherwise the plain number.
/// Shortest round-trip decimal, no rounding: 1234.5678 -> "1.2345678k".
pub fn tick_label(value: f64) -> String {
    if value >= 1000.0 {
        format!("{}k", value / 1000.0)
    } else {
        format!("{value}")
    }
}
