// backend/services/roster/api-server/tests/api_it.rs

use axum::body::Body;
use axum::Router;
use chrono::{TimeZone, Utc};
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use shared_kernel::clock::{Clock, FixedClock};
use tower::ServiceExt;

use roster::infrastructure::config::AppConfig;
use roster_api_server::build_router;
use roster_api_server::state::AppState;

// --- HELPERS ---

async fn setup() -> Router {
    let clock: Arc<dyn Clock> = Arc::new(FixedClock::new(Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap()));
    let state = AppState::from_config(&AppConfig::default(), clock).await.unwrap();
    build_router(state)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn post(uri: &str) -> Request<Body> {
    Request::builder().method("POST").uri(uri).body(Body::empty()).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

// --- TESTS ---

#[tokio::test]
async fn test_health() {
    let response = setup().await.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_create_member_then_duplicate_then_underage() {
    let router = setup().await;
    let alice = json!({
        "first_name": "Alice",
        "last_name": "Martin",
        "birth_date": "1991-04-02",
        "country": "Brazil",
        "city": "Rio de Janeiro"
    });

    let response = router.clone().oneshot(post_json("/members", alice.clone())).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["id"], 7);
    assert_eq!(body["country"], "Brazil");

    let response = router.clone().oneshot(post_json("/members", alice)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], "ALREADY_EXISTS");
    assert!(body["message"].as_str().unwrap().contains("already exists"));

    let minor = json!({
        "first_name": "Leo",
        "last_name": "Young",
        "birth_date": "2015-01-01",
        "country": "UK",
        "city": "Leeds"
    });
    let response = router.oneshot(post_json("/members", minor)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_FAILED");
    assert!(body["message"].as_str().unwrap().contains("18 years old"));
}

#[tokio::test]
async fn test_unknown_country_is_unprocessable() {
    let body = json!({
        "first_name": "Ana",
        "last_name": "Lopez",
        "birth_date": "1990-01-01",
        "country": "Atlantis",
        "city": "Poseidonis"
    });

    let response = setup().await.oneshot(post_json("/members", body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(response).await["code"], "UNKNOWN_COUNTRY");
}

#[tokio::test]
async fn test_list_members_sorted_and_upcoming() {
    let router = setup().await;

    let response = router
        .clone()
        .oneshot(get("/members?sort_by_birthday=true"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let ids: Vec<i64> = body.as_array().unwrap().iter().map(|m| m["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![1, 5, 2, 6, 3, 4]);
    assert_eq!(body[0]["days_until_birthday"], 5);

    let response = router.oneshot(get("/members?upcoming_only=true")).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["first_name"], "John");
}

#[tokio::test]
async fn test_get_member_and_not_found() {
    let router = setup().await;

    let response = router.clone().oneshot(get("/members/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["last_name"], "Smith");
    assert_eq!(body["birthday"]["next_birthday"], "2024-03-15");
    assert_eq!(body["birthday"]["age_years"], 33);

    let response = router.clone().oneshot(get("/members/404")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = router.oneshot(get("/members/abc")).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_birthday_message_shape_and_invalid_tone() {
    let router = setup().await;

    let response = router
        .clone()
        .oneshot(post("/members/3/birthday-message?tone=formal"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["message"].as_str().unwrap().starts_with("Dear Hans Mueller"));
    assert_eq!(body["explanation"]["model"], "mock-generator-v1");
    assert_eq!(body["explanation"]["method"], "template_based_generation");
    assert_eq!(body["explanation"]["parameters"]["language"], "de");
    assert!(body["explanation"]["rationale"].is_string());

    let response = router
        .oneshot(post("/members/3/birthday-message?tone=sarcastic"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(response).await["code"], "UNSUPPORTED_TONE");
}

#[tokio::test]
async fn test_send_email_defaults_to_dry_run() {
    let router = setup().await;

    let response = router.clone().oneshot(post("/members/2/send-email")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "dry_run");
    assert_eq!(body["email"]["to"], "emma.johnson@datavid.com");
    assert_eq!(body["email"]["subject"], "Happy Birthday, Emma!");

    let response = router
        .oneshot(post("/members/2/send-email?dry_run=false&tone=formal"))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["status"], "sent");
    assert_eq!(body["email"]["dry_run"], false);
}

#[tokio::test]
async fn test_malformed_query_is_a_json_validation_error() {
    let router = setup().await;

    let response = router.clone().oneshot(get("/members?window_days=abc")).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_FAILED");
    assert_eq!(body["details"]["source"], "query");
    assert!(body["details"]["reason"].as_str().unwrap().contains("window_days"));

    let response = router
        .oneshot(post("/members/1/send-email?dry_run=maybe"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(response).await["code"], "VALIDATION_FAILED");
}

#[tokio::test]
async fn test_incomplete_body_is_a_json_validation_error() {
    let response = setup()
        .await
        .oneshot(post_json("/members", json!({ "first_name": "A" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_FAILED");
    assert_eq!(body["details"]["source"], "body");
    assert!(body["details"]["reason"].as_str().unwrap().contains("last_name"));
}

#[tokio::test]
async fn test_uppercase_tone_is_unsupported() {
    let response = setup()
        .await
        .oneshot(post("/members/3/birthday-message?tone=FORMAL"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(response).await["code"], "UNSUPPORTED_TONE");
}
