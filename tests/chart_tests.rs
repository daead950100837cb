// Chart datasets and tick labels

mod common;

use common::*;
use usage_dashboard::chart::{tick_label, usage_charts};
use usage_dashboard::models::{ChartKind, UsageDocument};

#[test]
fn sample_charts_have_expected_shape() {
    let doc = sample_document();
    let charts = usage_charts(&doc);
    let ids: Vec<&str> = charts.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["streamingChart", "transcodingChart", "storageChart"]);
    assert_eq!(charts[0].kind, ChartKind::Line);
    assert_eq!(charts[1].kind, ChartKind::Line);
    assert_eq!(charts[2].kind, ChartKind::Bar);
    assert_eq!(charts[0].label, "Streaming Usage (sec)");
    assert_eq!(charts[2].title, "Storage Usage");

    assert_eq!(charts[0].labels, (1..=15).collect::<Vec<_>>());
    assert_eq!(charts[0].data[0], 110_673.0);
    assert_eq!(charts[0].data[14], 10_608.0);
}

#[test]
fn chart_labels_follow_each_series_length() {
    let doc = UsageDocument {
        bandwidth_consumption: vec![point(1.0, 1), point(2.0, 2), point(3.0, 3)],
        asset_duration: vec![point(9.0, 3)],
        ..Default::default()
    };
    let charts = usage_charts(&doc);
    assert_eq!(charts[0].labels, vec![1, 2, 3]);
    assert_eq!(charts[1].labels, vec![1]);
    assert_eq!(charts[1].data, vec![9.0]);
    assert_eq!(charts[1].tick_labels, vec!["9".to_string()]);
    assert!(charts[2].labels.is_empty());
    assert!(charts[2].tick_labels.is_empty());
    assert!(charts[2].data.is_empty());
}

#[test]
fn tick_label_uses_k_from_one_thousand() {
    assert_eq!(tick_label(0.0), "0");
    assert_eq!(tick_label(999.0), "999");
    assert_eq!(tick_label(12.5), "12.5");
    assert_eq!(tick_label(1000.0), "1k");
    assert_eq!(tick_label(1500.0), "1.5k");
    assert_eq!(tick_label(150_000.0), "150k");
    assert_eq!(tick_label(4_650_000.0), "4650k");
}

#[test]
fn tick_label_keeps_full_precision() {
    assert_eq!(tick_label(1234.5678), "1.2345678k");
    assert_eq!(tick_label(110_673.0), "110.673k");
    assert_eq!(tick_label(0.25), "0.25");
}

#[test]
fn charts_carry_a_tick_label_per_point() {
    let doc = sample_document();
    let charts = usage_charts(&doc);
    for c in &charts {
        assert_eq!(c.tick_labels.len(), c.data.len());
    }
    assert_eq!(charts[0].tick_labels[0], "110.673k");
    assert_eq!(charts[0].tick_labels[14], "10.608k");
}
