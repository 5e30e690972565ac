#![allow(clippy::unwrap_used, clippy::non_ascii_literal)]
//! Router tests for the HTTP boundary, driven through `tower::ServiceExt::oneshot`.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use greet::ValidationConfig;
use greet_cli::server::{ServerConfig, router};
use serde_json::{Value, json};
use tower::ServiceExt;

async fn send(config: &ServerConfig, method: &str, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap();
    let response = router(config).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post_hello(body: &Value) -> (StatusCode, Value) {
    send(&ServerConfig::default(), "POST", "/hello", &body.to_string()).await
}

#[tokio::test]
async fn test_hello_single_surname() {
    let (status, body) = post_hello(&json!({
        "name": "Taras",
        "surname": "Belov",
        "age": 20,
        "is_staff": false
    }))
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"Hello": "Taras Belov, 20"}));
}

#[tokio::test]
async fn test_hello_multiple_surnames_with_label() {
    let (status, body) = post_hello(&json!({
        "name": "Eduardo",
        "surname": ["Santos", "Tavares"],
        "age": 20,
        "is-staff": true,
        "education_level": "Высшее образование"
    }))
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"Hello": "Eduardo Santos Tavares, 20, высшее образование, сотрудник"})
    );
}

#[tokio::test]
async fn test_hello_rejects_with_detail_per_violation() {
    let (status, body) = post_hello(&json!({
        "name": "E",
        "surname": ["Santos", "Tavares"],
        "age": "forever young"
    }))
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let detail = body["detail"].as_array().unwrap();
    assert_eq!(detail.len(), 2);
    assert_eq!(detail[0]["loc"], json!(["name"]));
    assert_eq!(detail[0]["type"], "TooShort");
    assert_eq!(detail[1]["loc"], json!(["age"]));
    assert_eq!(detail[1]["type"], "TypeMismatch");
    assert_eq!(detail[1]["msg"], "value is not a valid integer");
}

#[tokio::test]
async fn test_hello_mixed_script_on_whole_record() {
    let (status, body) = post_hello(&json!({"name": "Taras", "surname": "Белов"})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"][0]["loc"], json!(["*"]));
    assert_eq!(body["detail"][0]["type"], "MixedScript");
}

#[tokio::test]
async fn test_hello_first_failure_config() {
    let config = ServerConfig {
        validation: ValidationConfig::first_failure(),
        ..ServerConfig::default()
    };
    let (status, body) = send(&config, "POST", "/hello", "{}").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"].as_array().unwrap().len(), 1);
    assert_eq!(body["detail"][0]["type"], "MissingField");
}

#[tokio::test]
async fn test_hello_invalid_json_is_bad_request() {
    let (status, body) = send(&ServerConfig::default(), "POST", "/hello", "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        body["detail"]
            .as_str()
            .unwrap()
            .starts_with("invalid JSON body")
    );
}

#[tokio::test]
async fn test_hello_non_object_body() {
    let (status, body) = send(&ServerConfig::default(), "POST", "/hello", "[1, 2]").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"][0]["loc"], json!(["*"]));
    assert_eq!(body["detail"][0]["type"], "TypeMismatch");
}

#[tokio::test]
async fn test_samples_endpoint() {
    let (status, body) = send(&ServerConfig::default(), "GET", "/samples", "").await;
    assert_eq!(status, StatusCode::OK);
    let keys: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["key"].as_str().unwrap())
        .collect();
    assert_eq!(keys, vec!["single_surname", "multiple_surnames", "invalid"]);
}

#[tokio::test]
async fn test_health_endpoint() {
    let (status, body) = send(&ServerConfig::default(), "GET", "/health", "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn test_verbose_logging_preserves_bodies() {
    let config = ServerConfig {
        verbose: 2,
        ..ServerConfig::default()
    };
    let raw = json!({"name": "Taras", "surname": "Belov"}).to_string();
    let (status, body) = send(&config, "POST", "/hello", &raw).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"Hello": "Taras Belov"}));
}
