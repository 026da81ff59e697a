/**
 * Service Route Configuration
 *
 * # Routes
 *
 * - `GET /` - Health check
 * - `GET /ping` - Liveness probe
 * - `GET /service/json/1/{service}` - Service locator
 * - `POST /token/json/2/device/new` - Device registration
 * - `POST /token/json/2/user/new` - User token
 * - `POST /token/json/3/device/delete` - Device removal
 */

use axum::{
    routing::{get, post},
    Router,
};

use crate::backend::server::state::AppState;
use crate::backend::service::{
    handle_device_delete, handle_device_new, handle_health, handle_ping, handle_service_locator,
    handle_user_new,
};

pub fn configure_service_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/", get(handle_health))
        .route("/ping", get(handle_ping))
        .route("/service/json/1/{service}", get(handle_service_locator))
        .route("/token/json/2/device/new", post(handle_device_new))
        .route("/token/json/2/user/new", post(handle_user_new))
        .route("/token/json/3/device/delete", post(handle_device_delete))
}
