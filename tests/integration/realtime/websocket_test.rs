//! Real-time notification integration tests
//!
//! Connects WebSocket clients and checks what the trigger endpoints and the
//! storage API push to them.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use std::time::Duration;

use crate::common::{spawn_app, spawn_app_with, TestApp};

/// Number of clients the hub reports, via `PUT /test`
async fn connected_clients(app: &TestApp) -> u64 {
    let response = app.server.put("/test").await;
    response.assert_status_ok();
    response.json::<Value>()["Clients"]
        .as_u64()
        .expect("Clients is a number")
}

async fn receive_json(websocket: &mut axum_test::TestWebSocket) -> Value {
    let text = websocket.receive_text().await;
    serde_json::from_str(&text).expect("Notification is not JSON")
}

#[tokio::test]
async fn test_ntf_reaches_connected_client() {
    let app = spawn_app().await;
    let mut websocket = app
        .server
        .get_websocket("/notifications/ws/json/1")
        .await
        .into_websocket()
        .await;

    let response = app.server.get("/ntf/hello").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "Status": "OK" }));
    assert_eq!(websocket.receive_text().await, "hello");
}

#[tokio::test]
async fn test_ntf_without_clients_still_ok() {
    let app = spawn_app().await;

    let response = app.server.get("/ntf/nobody-listening").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "Status": "OK" }));
}

#[tokio::test]
async fn test_ntf_reaches_every_client() {
    let app = spawn_app().await;
    let mut first = app
        .server
        .get_websocket("/notifications/ws/json/1")
        .await
        .into_websocket()
        .await;
    let mut second = app
        .server
        .get_websocket("/livesync/ws/json/2/auth0%7C1234/sub")
        .await
        .into_websocket()
        .await;

    app.server.get("/ntf/one").await.assert_status_ok();
    app.server.get("/ntf/two").await.assert_status_ok();

    for websocket in [&mut first, &mut second] {
        assert_eq!(websocket.receive_text().await, "one");
        assert_eq!(websocket.receive_text().await, "two");
    }
}

#[tokio::test]
async fn test_client_messages_are_ignored() {
    let app = spawn_app().await;
    let mut websocket = app
        .server
        .get_websocket("/notifications/ws/json/1")
        .await
        .into_websocket()
        .await;

    websocket.send_text("hello server").await;
    app.server.get("/ntf/still-here").await.assert_status_ok();

    assert_eq!(websocket.receive_text().await, "still-here");
}

#[tokio::test]
async fn test_test_endpoint_sends_doc_added() {
    let app = spawn_app().await;
    let mut websocket = app
        .server
        .get_websocket("/notifications/ws/json/1")
        .await
        .into_websocket()
        .await;

    let response = app.server.put("/test").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "Status": "OK", "Clients": 1 }));

    let notification = receive_json(&mut websocket).await;
    let attributes = &notification["message"]["attributes"];
    assert_eq!(attributes["event"], "DocAdded");
    assert_eq!(attributes["id"], "1234");
    assert_eq!(attributes["vissibleName"], "test");
    assert_eq!(notification["subscription"], "dummy-subscription");
}

#[tokio::test]
async fn test_update_status_notifies_doc_added() {
    let app = spawn_app().await;
    let mut websocket = app
        .server
        .get_websocket("/notifications/ws/json/1")
        .await
        .into_websocket()
        .await;

    app.server
        .put("/document-storage/json/2/upload/update-status")
        .json(&json!([{
            "ID": "doc-a",
            "Parent": "folder",
            "Type": "DocumentType",
            "Version": 7,
            "VissibleName": "Notes",
            "Bookmarked": true
        }]))
        .await
        .assert_status_ok();

    let notification = receive_json(&mut websocket).await;
    let message = &notification["message"];
    let attributes = &message["attributes"];
    assert_eq!(attributes["event"], "DocAdded");
    assert_eq!(attributes["id"], "doc-a");
    assert_eq!(attributes["parent"], "folder");
    assert_eq!(attributes["version"], "7");
    assert_eq!(attributes["vissibleName"], "Notes");
    assert_eq!(attributes["bookmarked"], true);
    assert_eq!(message["publishTime"], message["publish_time"]);
}

#[tokio::test]
async fn test_delete_notifies_doc_deleted() {
    let app = spawn_app().await;
    let mut websocket = app
        .server
        .get_websocket("/notifications/ws/json/1")
        .await
        .into_websocket()
        .await;

    app.server
        .put("/document-storage/json/2/delete")
        .json(&json!([{ "ID": "doc-a" }, { "ID": "doc-b" }]))
        .await
        .assert_status_ok();

    let first = receive_json(&mut websocket).await;
    let second = receive_json(&mut websocket).await;
    assert_eq!(first["message"]["attributes"]["event"], "DocDeleted");
    assert_eq!(first["message"]["attributes"]["id"], "doc-a");
    assert_eq!(second["message"]["attributes"]["id"], "doc-b");
}

#[tokio::test]
async fn test_closed_client_is_unregistered() {
    let app = spawn_app().await;
    let websocket = app
        .server
        .get_websocket("/notifications/ws/json/1")
        .await
        .into_websocket()
        .await;
    assert_eq!(connected_clients(&app).await, 1);

    websocket.close().await;

    let mut clients = 1;
    for _ in 0..100 {
        clients = connected_clients(&app).await;
        if clients == 0 {
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    assert_eq!(clients, 0);
}

#[tokio::test]
async fn test_lagging_client_keeps_connection() {
    let app = spawn_app_with(|builder| builder.broadcast_capacity(2)).await;
    let mut websocket = app
        .server
        .get_websocket("/notifications/ws/json/1")
        .await
        .into_websocket()
        .await;

    for i in 0..50 {
        app.server.get(&format!("/ntf/n{}", i)).await.assert_status_ok();
    }

    let mut last = String::new();
    for _ in 0..50 {
        last = websocket.receive_text().await;
        if last == "n49" {
            break;
        }
    }
    assert_eq!(last, "n49");
    assert_eq!(connected_clients(&app).await, 1);

    app.server.get("/ntf/after-lag").await.assert_status_ok();
    let mut frame = websocket.receive_text().await;
    // skip the DocAdded event sent by /test
    if frame.starts_with('{') {
        frame = websocket.receive_text().await;
    }
    assert_eq!(frame, "after-lag");
}
