use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde_json::{Value, json};
use tower_http::trace::TraceLayer;

use crate::service::RunSummary;
use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/run-monitoring", get(run_monitoring))
        .route("/status", get(status))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET / — Static service banner.
async fn home() -> Json<Value> {
    Json(json!({
        "status": "stock trend monitor running",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// GET /run-monitoring — One synchronous monitoring pass.
async fn run_monitoring(State(state): State<Arc<AppState>>) -> Json<RunSummary> {
    Json(state.service.run_once().await)
}

/// GET /status — Liveness with current time.
async fn status(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "OK",
        "time": Utc::now().to_rfc3339(),
        "started_at": state.started_at.to_rfc3339(),
        "symbols": state.service.watchlist().len(),
        "counters": state.service.counters().snapshot(),
    }))
}
