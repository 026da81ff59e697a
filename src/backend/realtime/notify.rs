/**
 * Notification Triggers
 *
 * HTTP endpoints that push something to every connected client:
 * - `GET /ntf/{msg}` sends `msg` as a text frame
 * - `PUT /test` sends a sample `DocAdded` document event
 */

use axum::{
    extract::{Path, State},
    response::Json,
};
use serde_json::{json, Value};

use crate::backend::realtime::hub::NotificationHub;
use crate::shared::{DocumentEvent, UpdateStatusRequest, WsMessage};

/// Handle notification fan-out (GET /ntf/{msg})
///
/// # Example Response
///
/// ```json
/// {"Status":"OK"}
/// ```
pub async fn handle_notify(
    State(hub): State<NotificationHub>,
    Path(msg): Path<String>,
) -> Json<Value> {
    tracing::info!("[Hub] ntf {} to {} clients", msg, hub.client_count());
    hub.send(msg);
    Json(json!({ "Status": "OK" }))
}

/// Handle test notification (PUT /test)
///
/// Broadcasts a `DocAdded` event for a fixed sample document, handy for
/// checking that a device reacts to pushes.
pub async fn handle_test_notification(State(hub): State<NotificationHub>) -> Json<Value> {
    let doc = UpdateStatusRequest {
        id: "1234".to_string(),
        doc_type: "DocumentType".to_string(),
        visible_name: "test".to_string(),
        ..Default::default()
    };
    let delivered = hub.send(WsMessage::document(DocumentEvent::DocAdded, &doc));
    Json(json!({ "Status": "OK", "Clients": delivered }))
}
