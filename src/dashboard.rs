// Dashboard session: the fetched document plus the view currently on screen.
// Views are always derived from the original document, so switching windows never narrows the data.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::{RwLock, broadcast};
use tracing::instrument;

use crate::chart::usage_charts;
use crate::filter::{Window, filter_document};
use crate::models::{AssetDurations, DashboardView, ReadyView, UsageDocument};
use crate::provider::UsageProvider;
use crate::summary::{TileFormat, asset_rows, usage_tiles};

/// Builds the view for `doc`. `window_days` is only recorded on the view; filtering happens before this.
pub fn build_view(
    doc: &UsageDocument,
    durations: &AssetDurations,
    window_days: Option<u32>,
    format: TileFormat,
) -> DashboardView {
    let Some(assets) = doc.top_assets.as_deref() else {
        return DashboardView::Loading;
    };
    DashboardView::Ready(ReadyView {
        window_days,
        tiles: usage_tiles(doc, format),
        charts: usage_charts(doc),
        top_assets: asset_rows(assets, durations),
    })
}

pub struct DashboardSession {
    provider: UsageProvider,
    tile_format: TileFormat,
    current: RwLock<DashboardView>,
    updates: broadcast::Sender<DashboardView>,
    filters_applied: AtomicU64,
}

impl DashboardSession {
    /// Starts on the unfiltered document with no window selected.
    pub fn new(provider: UsageProvider, tile_format: TileFormat, broadcast_capacity: usize) -> Self {
        let (updates, _) = broadcast::channel(broadcast_capacity.max(1));
        let initial = build_view(
            provider.document(),
            &provider.asset_durations(),
            None,
            tile_format,
        );
        Self {
            provider,
            tile_format,
            current: RwLock::new(initial),
            updates,
            filters_applied: AtomicU64::new(0),
        }
    }

    pub fn provider(&self) -> &UsageProvider {
        &self.provider
    }

    /// View for `window` at `now`, computed from the original document. Does not touch the session.
    pub fn view_for(&self, window: Window, now: i64) -> DashboardView {
        let filtered = filter_document(self.provider.document(), window, now);
        build_view(
            &filtered,
            &self.provider.asset_durations(),
            Some(window.days()),
            self.tile_format,
        )
    }

    pub async fn current(&self) -> DashboardView {
        self.current.read().await.clone()
    }

    #[instrument(skip(self), fields(session = "dashboard", operation = "apply_window", days = window.days()))]
    pub async fn apply_window(&self, window: Window, now: i64) -> DashboardView {
        let view = self.view_for(window, now);
        self.filters_applied.fetch_add(1, Ordering::Relaxed);
        if let Some(ready) = view.as_ready() {
            tracing::debug!(
                cutoff = window.cutoff(now),
                streaming_points = ready.charts.first().map(|c| c.data.len()),
                "window applied"
            );
        }
        self.replace(view).await
    }

    /// Back to the unfiltered document.
    #[instrument(skip(self), fields(session = "dashboard", operation = "reset"))]
    pub async fn reset(&self) -> DashboardView {
        let view = build_view(
            self.provider.document(),
            &self.provider.asset_durations(),
            None,
            self.tile_format,
        );
        self.replace(view).await
    }

    async fn replace(&self, view: DashboardView) -> DashboardView {
        // Publish under the write lock so subscribers see changes in the order they were stored.
        let mut current = self.current.write().await;
        *current = view.clone();
        if self.updates.send(view.clone()).is_err() {
            tracing::trace!(operation = "publish_view", "no live dashboard subscribers");
        }
        view
    }

    /// Receives every view change from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<DashboardView> {
        self.updates.subscribe()
    }

    pub fn filters_applied(&self) -> u64 {
        self.filters_applied.load(Ordering::Relaxed)
    }
}
