/**
 * Router Configuration
 *
 * Combines all route groups into a single Axum router.
 *
 * # Layers
 *
 * - `TraceLayer` - one tracing span per request
 * - `log_requests` - debug log of method, path and headers
 * - `DefaultBodyLimit` - `max_upload_bytes` from the configuration
 *
 * # Fallback
 *
 * Unmatched routes answer `404 {"Error":"not found"}`.
 */

use axum::{
    extract::DefaultBodyLimit,
    http::{StatusCode, Uri},
    middleware::from_fn,
    response::Json,
    Router,
};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::backend::middleware::log_requests;
use crate::backend::routes::notification_routes::configure_notification_routes;
use crate::backend::routes::service_routes::configure_service_routes;
use crate::backend::routes::storage_routes::configure_storage_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let max_upload_bytes = app_state.config.max_upload_bytes;

    let router = Router::new();
    let router = configure_service_routes(router);
    let router = configure_notification_routes(router);
    let router = configure_storage_routes(router);

    router
        .fallback(handle_not_found)
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(from_fn(log_requests)),
        )
        .with_state(app_state)
}

/// Fallback for unmatched routes
pub async fn handle_not_found(uri: Uri) -> (StatusCode, Json<Value>) {
    tracing::info!("got 404 for {}", uri);
    (StatusCode::NOT_FOUND, Json(json!({ "Error": "not found" })))
}
