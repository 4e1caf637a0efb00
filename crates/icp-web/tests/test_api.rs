//! Router-level tests: requests go through the full middleware stack.

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use icp_classifier::ClassifierConfig;
use icp_web::{router::build_router, state::AppState};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    build_router(AppState::new(ClassifierConfig::default()).expect("classifier builds"))
}

async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn post(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_health() {
    let (status, body) = send(app(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_classify_returns_flat_record() {
    let (status, body) = send(app(), post("/classify", json!({ "job_title": "Chief Financial Officer" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "input": "Chief Financial Officer",
            "is_icp": true,
            "department": "Finance",
            "subdivision": "General",
            "hierarchy_level": "C-Suite",
            "role_generic": "CFOs",
            "role_generic_singular": "CFO",
            "why": { "stage": "c_suite", "matched": "CFOs" }
        })
    );
}

#[tokio::test]
async fn test_classify_with_excludes() {
    let req = post("/classify", json!({ "job_title": "Marketing Intern", "excludes": "intern, /^junior/" }));
    let (status, body) = send(app(), req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_icp"], false);
    assert_eq!(body["why"], json!({ "excluded_by": "external_excludes" }));
    assert_eq!(body["department"], "");
}

#[tokio::test]
async fn test_missing_title_is_not_icp() {
    let (status, body) = send(app(), post("/classify", json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_icp"], false);
    assert_eq!(body["why"], json!({ "no_match": true }));
}

#[tokio::test]
async fn test_malformed_exclude_regex_is_bad_request() {
    let req = post("/classify", json!({ "job_title": "CEO", "excludes": "/(unclosed/" }));
    let (status, body) = send(app(), req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_exclude");
    assert!(body["detail"].as_str().unwrap().contains("(unclosed"));
}

#[tokio::test]
async fn test_batch() {
    let req = post(
        "/classify/batch",
        json!({ "job_titles": "CEO, Astronaut, , Head of Marketing", "excludes": null }),
    );
    let (status, body) = send(app(), req).await;
    assert_eq!(status, StatusCode::OK);

    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0]["role_generic"], "CEOs");
    assert_eq!(results[1]["is_icp"], false);
    assert_eq!(results[2]["role_generic"], "directores de marketing");
}

#[tokio::test]
async fn test_cache_stats_reflect_traffic() {
    let app = app();
    let (status, _) = send(app.clone(), post("/classify", json!({ "job_title": "Head of Sales" }))).await;
    assert_eq!(status, StatusCode::OK);

    let (status, stats) = send(app, get("/cache-stats")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["result_entries"], 1);
    assert_eq!(stats["result_capacity"], 10_000);
    assert!(stats["compiled_patterns"].as_u64().unwrap() > 0);
    assert!(stats["fast_path_entries"].as_u64().unwrap() > 0);
}
