// WebSocket handler: pushes the dashboard view on connect and on every change

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use bytes::Bytes;
use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use tokio::sync::broadcast::error::RecvError;
use tokio::time::{Duration, timeout};

use super::AppState;
use crate::dashboard::DashboardSession;
use crate::models::DashboardView;

pub(super) const WS_PING_INTERVAL: Duration = Duration::from_secs(30);
pub(super) const WS_SEND_TIMEOUT: Duration = Duration::from_secs(10);

/// Decrements ws_dashboard connection count on drop (connect = +1, drop = -1).
struct WsDashboardGuard(Arc<AtomicUsize>);

impl Drop for WsDashboardGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, std::sync::atomic::Ordering::Relaxed);
    }
}

pub(super) async fn ws_dashboard(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> impl IntoResponse {
    let session = state.session.clone();
    let conn_count = state.ws_dashboard_connections.clone();
    ws.on_upgrade(move |socket| async move {
        if let Err(e) = stream_dashboard(socket, session, conn_count).await {
            tracing::info!("Dashboard stream error: {}", e);
        }
    })
}

/// false when the client is gone or too slow.
async fn send_view(socket: &mut WebSocket, view: &DashboardView) -> anyhow::Result<bool> {
    let json = serde_json::to_string(view)?;
    let r = timeout(WS_SEND_TIMEOUT, socket.send(Message::Text(json.into()))).await;
    Ok(matches!(r, Ok(Ok(()))))
}

async fn stream_dashboard(
    mut socket: WebSocket,
    session: Arc<DashboardSession>,
    conn_count: Arc<AtomicUsize>,
) -> anyhow::Result<()> {
    conn_count.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
    let _guard = WsDashboardGuard(conn_count);
    tracing::info!("Client connected to dashboard stream");

    let mut rx = session.subscribe();
    if !send_view(&mut socket, &session.current().await).await? {
        return Ok(());
    }

    let mut ping_interval = tokio::time::interval(WS_PING_INTERVAL);
    ping_interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    // First tick completes immediately.
    ping_interval.tick().await;
    loop {
        tokio::select! {
            result = rx.recv() => {
                let view = match result {
                    Ok(v) => v,
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::debug!(skipped, "dashboard stream lagged; resending current view");
                        session.current().await
                    }
                    Err(RecvError::Closed) => break,
                };
                if !send_view(&mut socket, &view).await? {
                    break;
                }
            }
            _ = ping_interval.tick() => {
                let r = timeout(WS_SEND_TIMEOUT, socket.send(Message::Ping(Bytes::new()))).await;
                if r.is_err() || r.unwrap_or(Ok(())).is_err() {
                    break;
                }
            }
        }
    }
    Ok(())
}
