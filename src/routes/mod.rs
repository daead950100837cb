// HTTP + WebSocket routes

mod http;
mod ws;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use tower_http::cors::{Any, CorsLayer};

use crate::dashboard::DashboardSession;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) session: Arc<DashboardSession>,
    pub(crate) ws_dashboard_connections: Arc<AtomicUsize>,
}

pub fn app(session: Arc<DashboardSession>, ws_dashboard_connections: Arc<AtomicUsize>) -> Router {
    let state = AppState {
        session,
        ws_dashboard_connections,
    };
    Router::new()
        .route("/", get(|| async { "Hello from usage-dashboard!" })) // GET /
        .route("/version", get(http::version_handler)) // GET /version
        .route("/api/usageData", get(http::usage_data_handler)) // GET /api/usageData
        .route("/api/dashboard", get(http::dashboard_handler)) // GET /api/dashboard[?window=N]
        .route("/api/dashboard/filter", post(http::filter_handler)) // POST /api/dashboard/filter?window=N
        .route("/api/dashboard/reset", post(http::reset_handler)) // POST /api/dashboard/reset
        .route("/ws/dashboard", get(ws::ws_dashboard)) // WS /ws/dashboard
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
