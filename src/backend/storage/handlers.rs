/**
 * Document Storage Handlers
 *
 * Stubs for the `/document-storage/json/2/...` API plus the blob
 * upload/download pair the device is pointed at.
 *
 * # Routes
 *
 * - `PUT /document-storage/json/2/upload/request` - Hand out upload URLs
 * - `PUT /upload?id=` (alias `PUT /storage`) - Store an archive in the blob slot
 * - `GET /download?id=` (alias `GET /storage`) - Return the blob slot
 * - `PUT /document-storage/json/2/upload/update-status` - Acknowledge metadata
 * - `PUT /document-storage/json/2/delete` - Acknowledge deletions
 * - `GET /document-storage/json/2/docs` - List the one hardcoded document
 *
 * Nothing is persisted besides the blob slot. Update-status and delete only
 * log what they receive and notify connected clients.
 */

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Json},
};
use bytes::Bytes;
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::shared::document::decode_list;
use crate::shared::{
    DocumentEvent, IdRequest, RawDocument, SharedError, StatusResponse, UpdateStatusRequest,
    UploadRequest, UploadResponse, WsMessage,
};

/// `?id=` on the blob endpoints. Only logged.
#[derive(Debug, Default, Deserialize)]
pub struct BlobQuery {
    pub id: Option<String>,
}

/// Query of the docs listing
#[derive(Debug, Default, Deserialize)]
pub struct DocsQuery {
    #[serde(rename = "withBlob")]
    pub with_blob: Option<String>,
    #[serde(rename = "docId")]
    pub doc_id: Option<String>,
}

/// Build one upload reply per requested document
///
/// Entries without an ID, or an empty request, get a freshly generated ID.
pub fn plan_uploads(requests: &[UploadRequest], storage_url: &str) -> Vec<UploadResponse> {
    if requests.is_empty() {
        return vec![UploadResponse::new(Uuid::new_v4().to_string(), storage_url)];
    }

    requests
        .iter()
        .map(|request| {
            let id = if request.id.is_empty() {
                Uuid::new_v4().to_string()
            } else {
                request.id.clone()
            };
            UploadResponse::new(id, storage_url)
        })
        .collect()
}

/// Handle upload request (PUT /document-storage/json/2/upload/request)
///
/// # Example Request
///
/// ```json
/// [{"ID":"abc","Parent":"","Type":"DocumentType","Version":1}]
/// ```
///
/// # Example Response
///
/// ```json
/// [{"BlobURLPut":"http://localhost:3000/upload?id=abc","ID":"abc","Message":"","Success":true,"Version":1}]
/// ```
pub async fn handle_upload_request(
    State(app_state): State<AppState>,
    body: Bytes,
) -> Result<Json<Vec<UploadResponse>>, BackendError> {
    let requests: Vec<UploadRequest> = decode_list(&body)?;
    tracing::info!("[Storage] Upload request: {:?}", requests);

    let responses = plan_uploads(&requests, &app_state.config.storage_url);
    for response in &responses {
        tracing::debug!("[Storage] Upload URL for {}: {}", response.id, response.blob_url_put);
    }
    Ok(Json(responses))
}

/// Handle blob upload (PUT /upload?id=)
///
/// The raw body replaces the blob slot regardless of `id`.
pub async fn handle_blob_upload(
    State(app_state): State<AppState>,
    Query(query): Query<BlobQuery>,
    body: Bytes,
) -> Result<Json<Value>, BackendError> {
    tracing::info!(
        "[Storage] Uploading {} bytes for id {}",
        body.len(),
        query.id.as_deref().unwrap_or("<none>")
    );
    app_state.blobs.write(&body).await?;
    Ok(Json(json!({})))
}

/// Handle blob download (GET /download?id=)
///
/// # Errors
///
/// * `404 Not Found` - Nothing has been uploaded yet
pub async fn handle_blob_download(
    State(app_state): State<AppState>,
    Query(query): Query<BlobQuery>,
) -> Result<impl IntoResponse, BackendError> {
    tracing::info!(
        "[Storage] Download requested for id {}",
        query.id.as_deref().unwrap_or("<none>")
    );

    let data = app_state
        .blobs
        .read()
        .await
        .map_err(|e| BackendError::file(e, "blob"))?;

    Ok(([(header::CONTENT_TYPE, "application/zip")], data))
}

/// Handle status update (PUT /document-storage/json/2/upload/update-status)
///
/// Broadcasts a `DocAdded` event for every entry.
pub async fn handle_update_status(
    State(app_state): State<AppState>,
    body: Bytes,
) -> Result<Json<Vec<StatusResponse>>, BackendError> {
    let entries: Vec<UpdateStatusRequest> = decode_list(&body)?;

    let results = entries
        .iter()
        .map(|entry| {
            tracing::info!(
                "[Storage] Status update for {} ({}), version {}",
                entry.id,
                entry.visible_name,
                entry.version
            );
            app_state
                .hub
                .send(WsMessage::document(DocumentEvent::DocAdded, entry));
            StatusResponse::ok(entry.id.clone())
        })
        .collect();

    Ok(Json(results))
}

/// Handle delete (PUT /document-storage/json/2/delete)
///
/// Broadcasts a `DocDeleted` event for every entry.
///
/// # Errors
///
/// * `400 Bad Request` - Body is not a JSON array of `{"ID": ...}`, or is empty
pub async fn handle_delete(
    State(app_state): State<AppState>,
    body: Bytes,
) -> Result<Json<Vec<StatusResponse>>, BackendError> {
    let entries: Vec<IdRequest> = decode_list(&body)?;
    if entries.is_empty() {
        return Err(SharedError::validation("ID", "at least one document id is required").into());
    }

    let results = entries
        .into_iter()
        .map(|entry| {
            tracing::warn!("[Storage] deleting {}", entry.id);
            let doc = UpdateStatusRequest {
                id: entry.id,
                doc_type: "DocumentType".to_string(),
                ..Default::default()
            };
            app_state
                .hub
                .send(WsMessage::document(DocumentEvent::DocDeleted, &doc));
            StatusResponse::ok(doc.id)
        })
        .collect();

    Ok(Json(results))
}

/// Handle document listing (GET /document-storage/json/2/docs)
///
/// Always returns the same single document; `docId` only shows up in its
/// download URL and `withBlob=true` sets a download URL expiry.
pub async fn handle_list_documents(
    State(app_state): State<AppState>,
    Query(query): Query<DocsQuery>,
) -> Json<Vec<RawDocument>> {
    let with_blob = query.with_blob.as_deref().map(parse_flag).unwrap_or(false);
    let doc_id = query.doc_id.unwrap_or_default();
    tracing::info!("[Storage] Listing documents (withBlob={}, docId={})", with_blob, doc_id);

    Json(vec![RawDocument::sample(
        &app_state.config.host,
        &doc_id,
        with_blob,
        chrono::Utc::now(),
    )])
}

fn parse_flag(value: &str) -> bool {
    matches!(value.to_ascii_lowercase().as_str(), "true" | "t" | "1")
}
