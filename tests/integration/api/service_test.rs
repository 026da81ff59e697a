//! Service API integration tests
//!
//! Health check, discovery, tokens and the 404 fallback.

use axum::http::{header::AUTHORIZATION, HeaderValue, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::spawn_app;

#[tokio::test]
async fn test_health_check() {
    let app = spawn_app().await;

    let response = app.server.get("/").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), "hi");
}

#[tokio::test]
async fn test_ping() {
    let app = spawn_app().await;

    let response = app.server.get("/ping").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "message": "pong" }));
}

#[tokio::test]
async fn test_service_locator_returns_configured_host() {
    let app = spawn_app().await;

    for service in ["notifications", "document-storage", "anything-else"] {
        let response = app.server.get(&format!("/service/json/1/{}", service)).await;

        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(
            response.json::<Value>(),
            json!({ "Host": "local.appspot.com", "Status": "OK" })
        );
    }
}

#[tokio::test]
async fn test_device_new_returns_device_token() {
    let app = spawn_app().await;

    let response = app
        .server
        .post("/token/json/2/device/new")
        .json(&json!({
            "code": "abcdefgh",
            "deviceDesc": "desktop-linux",
            "deviceID": "701c3752-1025-4770-af43-5ddcfa4dabb2"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), "some device token");
}

#[tokio::test]
async fn test_device_new_rejects_malformed_body() {
    let app = spawn_app().await;

    let response = app
        .server
        .post("/token/json/2/device/new")
        .text("not json")
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["status"], 400);

    let response = app
        .server
        .post("/token/json/2/device/new")
        .json(&json!({ "code": "abc" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_user_new_returns_user_token() {
    let app = spawn_app().await;

    let response = app
        .server
        .post("/token/json/2/user/new")
        .add_header(AUTHORIZATION, HeaderValue::from_static("Bearer some device token"))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), "some user token");
}

#[tokio::test]
async fn test_user_new_accepts_non_ascii_authorization() {
    let app = spawn_app().await;
    let token = HeaderValue::from_bytes("Bearer é".as_bytes()).unwrap();

    let response = app
        .server
        .post("/token/json/2/user/new")
        .add_header(AUTHORIZATION, token)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), "some user token");
}

#[tokio::test]
async fn test_user_new_requires_authorization() {
    let app = spawn_app().await;

    let response = app.server.post("/token/json/2/user/new").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_device_delete_no_content() {
    let app = spawn_app().await;

    let response = app
        .server
        .post("/token/json/3/device/delete")
        .add_header(AUTHORIZATION, HeaderValue::from_static("Bearer some user token"))
        .await;

    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);
    assert!(response.as_bytes().is_empty());
}

#[tokio::test]
async fn test_unknown_route_returns_json_404() {
    let app = spawn_app().await;

    let response = app.server.get("/does/not/exist").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>(), json!({ "Error": "not found" }));
}
