// Dashboard view models (GET /api/dashboard, WS /ws/dashboard)

use serde::{Deserialize, Serialize};

/// Which usage series a tile or chart is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    Bandwidth,
    Duration,
    Storage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
}

/// Summary tile: heading, raw total and its display string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageTile {
    pub metric: MetricKind,
    pub heading: String,
    pub total: f64,
    pub display: String,
}

/// One chart's dataset; `labels` are 1-based point indexes, `tick_labels` the compact form of each data value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub id: String,
    pub title: String,
    pub kind: ChartKind,
    pub label: String,
    pub labels: Vec<usize>,
    pub data: Vec<f64>,
    pub tick_labels: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRow {
    pub asset_id: String,
    pub collection_id: String,
    pub collection_name: String,
    pub units: f64,
    pub stream_duration: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadyView {
    /// None until a filter has been applied.
    pub window_days: Option<u32>,
    pub tiles: Vec<UsageTile>,
    pub charts: Vec<ChartData>,
    pub top_assets: Vec<AssetRow>,
}

/// What the dashboard shows: a loading placeholder until the payload has top assets, then the full view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum DashboardView {
    Loading,
    Ready(ReadyView),
}

impl DashboardView {
    pub fn is_loading(&self) -> bool {
        matches!(self, DashboardView::Loading)
    }

    pub fn as_ready(&self) -> Option<&ReadyView> {
        match self {
            DashboardView::Ready(v) => Some(v),
            DashboardView::Loading => None,
        }
    }
}
