// Domain models: usage payload and dashboard view

mod usage;
mod view;

pub use usage::{AssetDurations, TimeSeriesPoint, TopAsset, UsageDocument};
pub use view::{AssetRow, ChartData, ChartKind, DashboardView, MetricKind, ReadyView, UsageTile};
