// Date-range filter: keeps series points inside a trailing window ending at `now`.

use serde::{Deserialize, Serialize};

use crate::models::{TimeSeriesPoint, UsageDocument};

pub const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Trailing window selectable on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "u32", from = "u32")]
pub enum Window {
    #[default]
    Last7Days,
    Last14Days,
    Last30Days,
}

impl Window {
    pub const ALL: [Window; 3] = [Window::Last7Days, Window::Last14Days, Window::Last30Days];

    pub fn days(self) -> u32 {
        match self {
            Window::Last7Days => 7,
            Window::Last14Days => 14,
            Window::Last30Days => 30,
        }
    }

    pub fn from_days(days: u32) -> Self {
        match days {
            14 => Window::Last14Days,
            30 => Window::Last30Days,
            _ => Window::Last7Days,
        }
    }

    /// Parses a request parameter; anything other than "7", "14" or "30" (missing included) is 7 days.
    pub fn from_param(param: Option<&str>) -> Self {
        param
            .and_then(|s| s.trim().parse::<u32>().ok())
            .map(Self::from_days)
            .unwrap_or_default()
    }

    pub fn seconds(self) -> i64 {
        i64::from(self.days()) * SECONDS_PER_DAY
    }

    /// Earliest timestamp kept when filtering at `now`.
    pub fn cutoff(self, now: i64) -> i64 {
        now - self.seconds()
    }
}

impl From<u32> for Window {
    fn from(days: u32) -> Self {
        Window::from_days(days)
    }
}

impl From<Window> for u32 {
    fn from(w: Window) -> Self {
        w.days()
    }
}

/// Points with `timestamp >= cutoff`, order preserved.
pub fn filter_series(series: &[TimeSeriesPoint], cutoff: i64) -> Vec<TimeSeriesPoint> {
    series
        .iter()
        .filter(|p| p.timestamp >= cutoff)
        .copied()
        .collect()
}

/// New document holding only the points inside `window` as of `now`; `top_assets` is passed through unchanged.
pub fn filter_document(doc: &UsageDocument, window: Window, now: i64) -> UsageDocument {
    let cutoff = window.cutoff(now);
    UsageDocument {
        bandwidth_consumption: filter_series(&doc.bandwidth_consumption, cutoff),
        top_assets: doc.top_assets.clone(),
        asset_duration: filter_series(&doc.asset_duration, cutoff),
        storage_unit: filter_series(&doc.storage_unit, cutoff),
    }
}

/// Current unix time in seconds.
pub fn now_unix() -> i64 {
    chrono::Utc::now().timestamp()
}
