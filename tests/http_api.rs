//! HTTP API Tests
//!
//! Drives the full router in-process with `tower::ServiceExt::oneshot`,
//! covering status codes, JSON shapes and the legacy `/user/...` paths.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use tallyboard::app::build_app;
use tallyboard::config::AppConfig;
use tallyboard::services::tally_service;
use tallyboard::state::{AnswerStore, Tally};

fn app_with(store: &AnswerStore) -> Router {
    build_app(store.clone(), AppConfig::default())
}

async fn send(app: Router, method: Method, uri: &str) -> (StatusCode, Vec<u8>) {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let res = app.oneshot(req).await.unwrap();
    let status = res.status();
    let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

// ============================================================
// SYSTEM
// ============================================================

#[tokio::test]
async fn test_health_check() {
    let store = AnswerStore::new();

    let (status, body) = send(app_with(&store), Method::GET, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"alive");
}

#[tokio::test]
async fn test_version_reports_config() {
    let store = AnswerStore::new();
    let cfg = AppConfig {
        server_version: "9.9.9".to_string(),
        ..AppConfig::default()
    };

    let (status, body) = send(build_app(store, cfg), Method::GET, "/version").await;

    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["version"], "9.9.9");
}

// ============================================================
// STATS & ANSWERS
// ============================================================

#[tokio::test]
async fn test_stats_for_unknown_user_is_zeroed() {
    let store = AnswerStore::new();

    let (status, body) = send(app_with(&store), Method::GET, "/stats/myuser").await;

    assert_eq!(status, StatusCode::OK);
    let tally: Tally = serde_json::from_slice(&body).unwrap();
    assert_eq!(tally, Tally::empty());
}

#[tokio::test]
async fn test_stats_json_field_names() {
    let store = AnswerStore::new();
    tally_service::record_answer(&store, "myuser", true);
    tally_service::record_answer(&store, "myuser", false);

    let (_, body) = send(app_with(&store), Method::GET, "/stats/myuser").await;

    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["user_id"], "myuser");
    assert_eq!(json["correct_answers"], 1);
    assert_eq!(json["incorrect_answers"], 1);
    assert_eq!(json["score"], 50.0);
}

#[tokio::test]
async fn test_save_correct_answer() {
    let store = AnswerStore::new();
    let before = tally_service::correct_count(&store, "myuser");

    let (status, body) =
        send(app_with(&store), Method::POST, "/correct_answer/myuser").await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body.is_empty());
    assert_eq!(tally_service::correct_count(&store, "myuser"), before + 1);
    assert_eq!(tally_service::incorrect_count(&store, "myuser"), 0);
}

#[tokio::test]
async fn test_save_incorrect_answer() {
    let store = AnswerStore::new();
    let before = tally_service::incorrect_count(&store, "myuser");

    let (status, body) =
        send(app_with(&store), Method::POST, "/incorrect_answer/myuser").await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body.is_empty());
    assert_eq!(tally_service::incorrect_count(&store, "myuser"), before + 1);
    assert_eq!(tally_service::correct_count(&store, "myuser"), 0);
}

#[tokio::test]
async fn test_answer_routes_reject_get() {
    let store = AnswerStore::new();

    let (status, _) = send(app_with(&store), Method::GET, "/correct_answer/myuser").await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(tally_service::user_count(&store), 0);
}

#[tokio::test]
async fn test_missing_user_id_is_not_found() {
    let store = AnswerStore::new();

    let (status, _) = send(app_with(&store), Method::GET, "/stats/").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_legacy_user_routes() {
    let store = AnswerStore::new();

    let (status, _) = send(app_with(&store), Method::POST, "/user/old/correct_answer").await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = send(app_with(&store), Method::POST, "/user/old/incorrect_answer").await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(app_with(&store), Method::GET, "/user/old/stats").await;
    assert_eq!(status, StatusCode::OK);

    let tally: Tally = serde_json::from_slice(&body).unwrap();
    assert_eq!(tally.user_id, "old");
    assert_eq!(tally.correct, 1);
    assert_eq!(tally.incorrect, 1);
    assert_eq!(tally.score, 50.0);
}

// ============================================================
// RANKING
// ============================================================

async fn seeded_store() -> AnswerStore {
    let store = AnswerStore::new();
    let app = app_with(&store);

    for (user, n) in [("user3", 3), ("user2", 2), ("user1", 1)] {
        for _ in 0..n {
            let uri = format!("/correct_answer/{user}");
            let (status, _) = send(app.clone(), Method::POST, &uri).await;
            assert_eq!(status, StatusCode::CREATED);
        }
    }

    store
}

#[tokio::test]
async fn test_ranking_handler() {
    let store = seeded_store().await;

    let (status, body) = send(app_with(&store), Method::GET, "/ranking").await;

    assert_eq!(status, StatusCode::OK);
    let ranking: Vec<Tally> = serde_json::from_slice(&body).unwrap();
    let ids: Vec<&str> = ranking.iter().map(|t| t.user_id.as_str()).collect();
    assert_eq!(ids, vec!["user3", "user2", "user1"]);
}

#[tokio::test]
async fn test_ranking_with_limit() {
    let store = seeded_store().await;

    let (status, body) = send(app_with(&store), Method::GET, "/ranking?limit=2").await;

    assert_eq!(status, StatusCode::OK);
    let ranking: Vec<Tally> = serde_json::from_slice(&body).unwrap();
    assert_eq!(ranking.len(), 2);
    assert_eq!(ranking[0].user_id, "user3");
    assert_eq!(ranking[1].user_id, "user2");
}

#[tokio::test]
async fn test_empty_ranking_is_empty_array() {
    let store = AnswerStore::new();

    let (status, body) = send(app_with(&store), Method::GET, "/ranking").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"[]");
}

// ============================================================
// CORS & CONCURRENCY
// ============================================================

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let store = AnswerStore::new();
    let req = Request::builder()
        .method(Method::OPTIONS)
        .uri("/ranking")
        .header(header::ORIGIN, "http://quiz.example")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();

    let res = app_with(&store).oneshot(req).await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let headers = res.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    let methods = headers[header::ACCESS_CONTROL_ALLOW_METHODS].to_str().unwrap();
    for m in ["GET", "HEAD", "POST", "PUT", "OPTIONS"] {
        assert!(methods.contains(m), "{m} missing from {methods}");
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_requests_lose_no_updates() {
    const REQUESTS: usize = 200;

    let store = AnswerStore::new();
    let app = app_with(&store);

    let mut handles = Vec::with_capacity(REQUESTS);
    for _ in 0..REQUESTS {
        let app = app.clone();
        handles.push(tokio::spawn(async move {
            send(app, Method::POST, "/correct_answer/racer").await.0
        }));
    }
    for handle in handles {
        assert_eq!(handle.await.unwrap(), StatusCode::CREATED);
    }

    let tally = tally_service::get_tally(&store, "racer");
    assert_eq!(tally.correct, REQUESTS as u64);
    assert_eq!(tally.score, 100.0);
}
