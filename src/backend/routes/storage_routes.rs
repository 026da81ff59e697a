/**
 * Storage Route Configuration
 *
 * # Routes
 *
 * ## Document storage API
 * - `PUT /document-storage/json/2/upload/request`
 * - `PUT /document-storage/json/2/upload/update-status`
 * - `PUT /document-storage/json/2/delete`
 * - `GET /document-storage/json/2/docs`
 *
 * ## Blob slot
 * - `PUT /upload`, `PUT /storage` - Upload
 * - `GET /download`, `GET /storage` - Download
 *
 * ## Documents
 * - `POST /api/v2/document` - Send by email
 * - `POST /api/v1/page` - Page recognition
 */

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::backend::documents::{handle_document_email, handle_page};
use crate::backend::server::state::AppState;
use crate::backend::storage::{
    handle_blob_download, handle_blob_upload, handle_delete, handle_list_documents,
    handle_update_status, handle_upload_request,
};

pub fn configure_storage_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route(
            "/document-storage/json/2/upload/request",
            put(handle_upload_request),
        )
        .route(
            "/document-storage/json/2/upload/update-status",
            put(handle_update_status),
        )
        .route("/document-storage/json/2/delete", put(handle_delete))
        .route("/document-storage/json/2/docs", get(handle_list_documents))
        .route("/upload", put(handle_blob_upload))
        .route("/download", get(handle_blob_download))
        .route(
            "/storage",
            get(handle_blob_download).put(handle_blob_upload),
        )
        .route("/api/v2/document", post(handle_document_email))
        .route("/api/v1/page", post(handle_page))
}
