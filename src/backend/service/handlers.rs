/**
 * Service Handlers
 *
 * Health check, service discovery and token issuance. The device calls these
 * first when it starts syncing; all of them return canned values.
 *
 * # Routes
 *
 * - `GET /` - Health check
 * - `GET /ping` - Liveness probe
 * - `GET /service/json/1/{service}` - Service locator
 * - `POST /token/json/2/device/new` - Register a device
 * - `POST /token/json/2/user/new` - Refresh a user token
 * - `POST /token/json/3/device/delete` - Unregister a device
 */

use axum::{
    extract::{Path, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::Json,
};
use bytes::Bytes;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::backend::error::BackendError;
use crate::shared::{DeviceTokenRequest, HostResponse, ServerConfig, SharedError};

pub const DEVICE_TOKEN: &str = "some device token";
pub const USER_TOKEN: &str = "some user token";

/// Handle health check (GET /)
pub async fn handle_health() -> &'static str {
    "hi"
}

/// Handle ping (GET /ping)
pub async fn handle_ping() -> Json<Value> {
    Json(json!({ "message": "pong" }))
}

/// Handle service locator (GET /service/json/1/{service})
///
/// Every service lives on the configured host.
///
/// # Example Response
///
/// ```json
/// {"Host":"local.appspot.com","Status":"OK"}
/// ```
pub async fn handle_service_locator(
    State(config): State<Arc<ServerConfig>>,
    Path(service): Path<String>,
) -> Json<HostResponse> {
    tracing::info!("[Service] Locating: {}", service);
    Json(HostResponse::ok(config.host.clone()))
}

/// Handle device registration (POST /token/json/2/device/new)
///
/// # Errors
///
/// * `400 Bad Request` - Body is not JSON or lacks `code`, `deviceDesc` or `deviceID`
pub async fn handle_device_new(body: Bytes) -> Result<&'static str, BackendError> {
    let request: DeviceTokenRequest =
        serde_json::from_slice(&body).map_err(SharedError::from)?;
    tracing::info!(
        "[Service] Registering device {} ({}) with code {}",
        request.device_id,
        request.device_desc,
        request.code
    );
    Ok(DEVICE_TOKEN)
}

/// Handle user token request (POST /token/json/2/user/new)
///
/// The device authenticates with its device token; it is logged, not checked.
///
/// # Errors
///
/// * `400 Bad Request` - `Authorization` header missing
pub async fn handle_user_new(headers: HeaderMap) -> Result<&'static str, BackendError> {
    let auth = headers
        .get(AUTHORIZATION)
        .ok_or_else(|| BackendError::bad_request("missing Authorization header"))?;
    tracing::info!(
        "[Service] Got auth token: {}",
        String::from_utf8_lossy(auth.as_bytes())
    );
    Ok(USER_TOKEN)
}

/// Handle device removal (POST /token/json/3/device/delete)
pub async fn handle_device_delete(headers: HeaderMap) -> StatusCode {
    tracing::info!(
        "[Service] Device delete, auth: {:?}",
        headers.get(AUTHORIZATION)
    );
    StatusCode::NO_CONTENT
}
