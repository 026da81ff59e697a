/**
 * Notification Route Configuration
 *
 * # Routes
 *
 * - `GET /notifications/ws/json/1` - WebSocket notifications
 * - `GET /livesync/ws/json/2/{authid}/sub` - WebSocket live sync
 * - `GET /ntf/{msg}` - Push a text frame to every client
 * - `PUT /test` - Push a sample document event
 */

use axum::{
    routing::{get, put},
    Router,
};

use crate::backend::realtime::{
    handle_livesync_socket, handle_notification_socket, handle_notify, handle_test_notification,
};
use crate::backend::server::state::AppState;

pub fn configure_notification_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/notifications/ws/json/1", get(handle_notification_socket))
        .route("/livesync/ws/json/2/{authid}/sub", get(handle_livesync_socket))
        .route("/ntf/{msg}", get(handle_notify))
        .route("/test", put(handle_test_notification))
}
