//! Document storage integration tests
//!
//! Upload requests, the blob slot, status updates, deletes and the listing.

use axum::http::StatusCode;
use bytes::Bytes;
use fakecloud::shared::document::{SAMPLE_DOCUMENT_ID, ZERO_TIME};
use fakecloud::shared::{StatusResponse, UploadResponse};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{spawn_app, spawn_app_with};

#[tokio::test]
async fn test_upload_request_points_at_storage_url() {
    let app = spawn_app().await;

    let response = app
        .server
        .put("/document-storage/json/2/upload/request")
        .json(&json!([
            { "ID": "doc-a", "Type": "DocumentType", "Version": 1 },
            { "ID": "doc-b" }
        ]))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let uploads = response.json::<Vec<UploadResponse>>();
    assert_eq!(uploads.len(), 2);
    assert_eq!(uploads[0].id, "doc-a");
    assert_eq!(uploads[0].blob_url_put, "http://localhost:3000/upload?id=doc-a");
    assert_eq!(uploads[1].blob_url_put, "http://localhost:3000/upload?id=doc-b");
    assert!(uploads.iter().all(|u| u.success && u.version == 1));
}

#[tokio::test]
async fn test_upload_request_empty_body_gets_generated_id() {
    let app = spawn_app().await;

    let response = app
        .server
        .put("/document-storage/json/2/upload/request")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let uploads = response.json::<Vec<UploadResponse>>();
    assert_eq!(uploads.len(), 1);
    assert!(uuid::Uuid::parse_str(&uploads[0].id).is_ok());
}

#[tokio::test]
async fn test_upload_request_rejects_malformed_body() {
    let app = spawn_app().await;

    let response = app
        .server
        .put("/document-storage/json/2/upload/request")
        .text("{not json")
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_download_before_upload_is_not_found() {
    let app = spawn_app().await;

    let response = app.server.get("/download").add_query_param("id", "x").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_upload_then_download_roundtrip() {
    let app = spawn_app().await;
    let archive = Bytes::from_static(b"PK\x03\x04 fake zip archive");

    let response = app
        .server
        .put("/upload")
        .add_query_param("id", "doc-a")
        .bytes(archive.clone())
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({}));

    let response = app.server.get("/download").add_query_param("id", "other").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.header("content-type"), "application/zip");
    assert_eq!(response.as_bytes(), &archive);

    assert!(app.data_dir().join(&app.config.blob_file).exists());
}

#[tokio::test]
async fn test_storage_alias_shares_the_slot() {
    let app = spawn_app().await;

    app.server
        .put("/storage")
        .bytes(Bytes::from_static(b"first"))
        .await
        .assert_status_ok();
    let response = app.server.get("/download").await;
    assert_eq!(response.as_bytes(), &Bytes::from_static(b"first"));

    app.server
        .put("/upload")
        .bytes(Bytes::from_static(b"second"))
        .await
        .assert_status_ok();
    let response = app.server.get("/storage").await;
    assert_eq!(response.as_bytes(), &Bytes::from_static(b"second"));
}

#[tokio::test]
async fn test_upload_over_body_limit_is_rejected() {
    let app = spawn_app_with(|builder| builder.max_upload_bytes(16)).await;

    let response = app
        .server
        .put("/upload")
        .bytes(Bytes::from(vec![0u8; 64]))
        .await;

    assert_eq!(response.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_update_status_acknowledges_each_entry() {
    let app = spawn_app().await;

    let response = app
        .server
        .put("/document-storage/json/2/upload/update-status")
        .json(&json!([
            { "ID": "doc-a", "VissibleName": "Notes", "Version": 2, "Type": "DocumentType" },
            { "ID": "doc-b" }
        ]))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Vec<StatusResponse>>(),
        vec![StatusResponse::ok("doc-a"), StatusResponse::ok("doc-b")]
    );
}

#[tokio::test]
async fn test_update_status_requires_ids() {
    let app = spawn_app().await;

    let response = app
        .server
        .put("/document-storage/json/2/upload/update-status")
        .json(&json!([{ "VissibleName": "Notes" }]))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_acknowledges_each_entry() {
    let app = spawn_app().await;

    let response = app
        .server
        .put("/document-storage/json/2/delete")
        .json(&json!([{ "ID": "doc-a" }]))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Vec<StatusResponse>>(),
        vec![StatusResponse::ok("doc-a")]
    );
}

#[tokio::test]
async fn test_delete_rejects_empty_list() {
    let app = spawn_app().await;

    let response = app
        .server
        .put("/document-storage/json/2/delete")
        .json(&json!([]))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["status"], 400);
    assert!(body["error"].as_str().unwrap_or_default().contains("ID"));
}

#[tokio::test]
async fn test_list_documents_without_blob() {
    let app = spawn_app().await;

    let response = app
        .server
        .get("/document-storage/json/2/docs")
        .add_query_param("docId", "doc-a")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let docs = response.json::<Value>();
    let docs = docs.as_array().expect("listing is an array");
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0]["ID"], SAMPLE_DOCUMENT_ID);
    assert_eq!(docs[0]["VissibleName"], "Stuff");
    assert_eq!(docs[0]["Type"], "DocumentType");
    assert_eq!(docs[0]["Version"], 4);
    assert_eq!(
        docs[0]["BlobURLGet"],
        "https://local.appspot.com/download?id=doc-a"
    );
    assert_eq!(docs[0]["BlobURLGetExpires"], ZERO_TIME);
}

#[tokio::test]
async fn test_list_documents_with_blob_sets_expiry() {
    let app = spawn_app().await;
    let before = chrono::Utc::now();

    let response = app
        .server
        .get("/document-storage/json/2/docs")
        .add_query_param("withBlob", "true")
        .await;

    let docs = response.json::<Value>();
    let expires = docs[0]["BlobURLGetExpires"]
        .as_str()
        .expect("expiry is a string");
    let expires = chrono::DateTime::parse_from_rfc3339(expires).expect("expiry is RFC 3339");
    let ttl = expires.with_timezone(&chrono::Utc) - before;
    assert!(ttl > chrono::Duration::minutes(4));
    assert!(ttl <= chrono::Duration::minutes(6));
}
