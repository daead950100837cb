// GET/POST handlers: version, usage data, dashboard view and filter

use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use super::AppState;
use crate::filter::{Window, now_unix};
use crate::version::{NAME, VERSION};

#[derive(Debug, Deserialize)]
pub(super) struct WindowQuery {
    window: Option<String>,
}

/// GET /version — returns service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}

/// GET /api/usageData — the fixed usage payload, identical on every call.
pub(super) async fn usage_data_handler(State(state): State<AppState>) -> impl IntoResponse {
    axum::Json(state.session.provider().payload().clone())
}

/// GET /api/dashboard — current view; with `?window=N`, the view for that window without changing the session.
pub(super) async fn dashboard_handler(
    State(state): State<AppState>,
    Query(query): Query<WindowQuery>,
) -> impl IntoResponse {
    let view = match query.window.as_deref() {
        Some(param) => state
            .session
            .view_for(Window::from_param(Some(param)), now_unix()),
        None => state.session.current().await,
    };
    axum::Json(view)
}

/// POST /api/dashboard/filter?window=N — applies the window to the session (unknown values mean 7 days).
pub(super) async fn filter_handler(
    State(state): State<AppState>,
    Query(query): Query<WindowQuery>,
) -> impl IntoResponse {
    let window = Window::from_param(query.window.as_deref());
    axum::Json(state.session.apply_window(window, now_unix()).await)
}

/// POST /api/dashboard/reset — back to the unfiltered view.
pub(super) async fn reset_handler(State(state): State<AppState>) -> impl IntoResponse {
    axum::Json(state.session.reset().await)
}
