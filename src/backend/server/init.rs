/**
 * Server Initialization
 *
 * Builds the Axum application from a `ServerConfig`.
 *
 * # Initialization Process
 *
 * 1. Create the data directory (blob slot and page fixture live there)
 * 2. Create the notification hub and blob store
 * 3. Create and configure the router
 */

use axum::Router;

use crate::backend::error::BackendError;
use crate::backend::routes::router::create_router;
use crate::backend::server::state::AppState;
use crate::shared::ServerConfig;

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails if the data directory cannot be created.
pub async fn create_app(config: ServerConfig) -> Result<Router<()>, BackendError> {
    tracing::info!("Initializing fakecloud backend server");

    tokio::fs::create_dir_all(&config.data_dir).await?;

    tracing::info!("Files will be saved in: {}", config.data_dir.display());
    tracing::info!("Url the device should use: {}", config.storage_url);
    tracing::info!("Service host: {}", config.host);

    let app_state = AppState::new(config);
    let app = create_router(app_state);

    tracing::info!("Router configured");
    Ok(app)
}
