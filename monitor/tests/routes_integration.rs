
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use market::TrendConfig;
use monitor::metrics::counters::Counters;
use monitor::notify::Delivery;
use monitor::routes;
use monitor::service::MonitorService;
use monitor::state::AppState;
use serde_json::Value;
use tower::ServiceExt;

use mocks::{RecordingNotifier, ScriptedQuotes};

fn app(quotes: Arc<ScriptedQuotes>, notifier: Arc<RecordingNotifier>) -> Router {
    let service =
        MonitorService::new(quotes, notifier, TrendConfig::default(), Counters::default());
    routes::router(AppState::new(service))
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let resp = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn home_reports_service_and_version() {
    let app = app(
        Arc::new(ScriptedQuotes::new()),
        Arc::new(RecordingNotifier::new(Delivery::Sent)),
    );

    let (status, body) = get_json(app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["status"].as_str().unwrap().contains("running"));
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn run_monitoring_returns_summary() {
    let quotes = Arc::new(ScriptedQuotes::new());
    quotes.script("PKN", &[Some(60.0), Some(58.0)]);
    let notifier = Arc::new(RecordingNotifier::new(Delivery::Sent));
    let app = app(quotes, notifier.clone());

    let (status, first) = get_json(app.clone(), "/run-monitoring").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["status"], "OK");
    assert_eq!(first["alerts"], 0);
    assert_eq!(first["results"][0]["trend"], "NO_DATA");

    let (_, second) = get_json(app, "/run-monitoring").await;
    assert_eq!(second["alerts"], 1);
    assert_eq!(second["notified"], true);
    assert_eq!(second["results"][0]["symbol"], "PKN");
    assert_eq!(second["results"][0]["trend"], "DOWN");
    assert_eq!(notifier.messages().len(), 1);
}

#[tokio::test]
async fn run_monitoring_with_no_quotes_is_still_ok() {
    let app = app(
        Arc::new(ScriptedQuotes::new()),
        Arc::new(RecordingNotifier::new(Delivery::Sent)),
    );

    let (status, body) = get_json(app, "/run-monitoring").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "OK");
    assert_eq!(body["alerts"], 0);
    assert_eq!(body["notified"], false);
}

#[tokio::test]
async fn status_reports_time_and_counters() {
    let app = app(
        Arc::new(ScriptedQuotes::new()),
        Arc::new(RecordingNotifier::new(Delivery::Sent)),
    );

    get_json(app.clone(), "/run-monitoring").await;
    let (status, body) = get_json(app, "/status").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "OK");
    let time = body["time"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(time).is_ok());
    assert_eq!(body["counters"]["runs"], 1);
    assert_eq!(body["symbols"], 5);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = app(
        Arc::new(ScriptedQuotes::new()),
        Arc::new(RecordingNotifier::new(Delivery::Sent)),
    );

    let resp = app
        .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
