/**
 * Document and Page Handlers
 *
 * - `POST /api/v2/document` - "Send by email": a multipart form with an
 *   attachment and mail headers. Everything is logged, nothing is sent.
 * - `POST /api/v1/page` - Handwriting recognition: answers every request with
 *   the contents of the page fixture file.
 */

use std::sync::Arc;

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::header,
    response::{IntoResponse, Json},
};
use bytes::Bytes;
use serde_json::{json, Value};

use crate::backend::error::BackendError;
use crate::shared::ServerConfig;

fn multipart_error(err: MultipartError) -> BackendError {
    BackendError::bad_request(format!("invalid multipart body: {}", err))
}

/// Handle document email (POST /api/v2/document)
///
/// Text fields (`from`, `reply-to`, `subject`, `html`, ...) are logged with
/// their values, file fields with their file name and size.
///
/// # Errors
///
/// * `400 Bad Request` - Body is not valid multipart form data
pub async fn handle_document_email(mut multipart: Multipart) -> Result<Json<Value>, BackendError> {
    tracing::info!("[Documents] email");

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or_default().to_string();

        match field.file_name().map(str::to_string) {
            Some(file_name) => {
                let data = field.bytes().await.map_err(multipart_error)?;
                tracing::info!(
                    "[Documents] {}: file {} ({} bytes)",
                    name,
                    file_name,
                    data.len()
                );
            }
            None => {
                let value = field.text().await.map_err(multipart_error)?;
                tracing::info!("[Documents] {}: {}", name, value);
            }
        }
    }

    Ok(Json(json!({})))
}

/// Handle page recognition (POST /api/v1/page)
///
/// # Errors
///
/// * `404 Not Found` - The page fixture file does not exist
pub async fn handle_page(
    State(config): State<Arc<ServerConfig>>,
    body: Bytes,
) -> Result<impl IntoResponse, BackendError> {
    tracing::debug!("[Documents] page request of {} bytes", body.len());

    let path = config.page_path();
    let content = tokio::fs::read(&path)
        .await
        .map_err(|e| BackendError::file(e, format!("page fixture {}", path.display())))?;

    Ok(([(header::CONTENT_TYPE, "application/json")], content))
}
