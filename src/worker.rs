// Background stats logger: periodically reports live dashboard clients and filter activity.

use crate::dashboard::DashboardSession;
use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use tokio::time::{Duration, interval};
use tracing::Instrument;

/// Session, counters and shutdown for the worker.
pub struct WorkerDeps {
    pub session: Arc<DashboardSession>,
    pub ws_dashboard_connections: Arc<AtomicUsize>,
    pub shutdown_rx: tokio::sync::oneshot::Receiver<()>,
}

pub struct WorkerConfig {
    /// How often to log app stats (real seconds).
    pub stats_log_interval_secs: u64,
}

pub fn spawn(deps: WorkerDeps, config: WorkerConfig) -> tokio::task::JoinHandle<()> {
    let WorkerDeps {
        session,
        ws_dashboard_connections,
        mut shutdown_rx,
    } = deps;
    let stats_log_interval = Duration::from_secs(config.stats_log_interval_secs.max(1));

    let worker_span = tracing::span!(
        tracing::Level::DEBUG,
        "worker",
        stats_log_interval_secs = config.stats_log_interval_secs
    );

    tokio::spawn(
        async move {
            let mut stats_log_tick = interval(stats_log_interval);
            stats_log_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        tracing::debug!("Worker shutting down");
                        break;
                    }
                    _ = stats_log_tick.tick() => {
                        tracing::info!(
                            ws_dashboard_clients =
                                ws_dashboard_connections.load(std::sync::atomic::Ordering::Relaxed),
                            filters_applied_total = session.filters_applied(),
                            "app stats"
                        );
                    }
                }
            }
        }
        .instrument(worker_span),
    )
}
