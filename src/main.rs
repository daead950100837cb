use anyhow::Result;
use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;
use usage_dashboard::*;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .init();

    let app_config = config::AppConfig::load()?;

    let source = provider::UsageSource::from_config(app_config.dashboard.data_file.as_deref());
    let usage_provider = provider::UsageProvider::load(&source)?;
    let session = Arc::new(dashboard::DashboardSession::new(
        usage_provider,
        app_config.dashboard.tile_format,
        app_config.dashboard.broadcast_capacity,
    ));

    let ws_dashboard_connections = Arc::new(AtomicUsize::new(0));
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();

    let worker_handle = worker::spawn(
        worker::WorkerDeps {
            session: session.clone(),
            ws_dashboard_connections: ws_dashboard_connections.clone(),
            shutdown_rx,
        },
        worker::WorkerConfig {
            stats_log_interval_secs: app_config.monitoring.stats_log_interval_secs,
        },
    );

    let app = routes::app(session, ws_dashboard_connections);
    let addr = format!("{}:{}", app_config.server.host, app_config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on http://{}", addr);

    tokio::select! {
        result = axum::serve(listener, app) => {
            result?;
        }
        _ = shutdown_signal() => {
            tracing::info!("Received shutdown signal");
            let _ = shutdown_tx.send(());
            let _ = worker_handle.await;
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        let mut sigterm =
            match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                Ok(s) => s,
                Err(_) => {
                    let _ = tokio::signal::ctrl_c().await;
                    return;
                }
            };
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {}
            _ = sigterm.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
