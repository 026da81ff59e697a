/**
 * Application State Management
 *
 * `AppState` is the central state container shared by every handler. It
 * holds:
 * - the server configuration
 * - the notification hub (registry of connected WebSocket clients)
 * - the blob store (the single uploaded archive)
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers extract just the part they need,
 * e.g. `State<NotificationHub>` or `State<Arc<ServerConfig>>`, following
 * Axum's recommended pattern.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::realtime::hub::NotificationHub;
use crate::backend::storage::blob::BlobStore;
use crate::shared::ServerConfig;

/// Application state shared by all handlers
///
/// # Thread Safety
///
/// - `Arc<ServerConfig>` is read-only after startup
/// - `NotificationHub` wraps a `broadcast::Sender`, which is thread-safe and clonable
/// - `BlobStore` serializes writes behind a `tokio::sync::Mutex`
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Registry of connected clients and notification fan-out
    pub hub: NotificationHub,

    /// Single-slot blob store
    pub blobs: BlobStore,
}

impl AppState {
    /// Build state from a configuration
    pub fn new(config: ServerConfig) -> Self {
        let hub = NotificationHub::new(config.broadcast_capacity);
        let blobs = BlobStore::new(config.blob_path());
        Self {
            config: Arc::new(config),
            hub,
            blobs,
        }
    }
}

impl FromRef<AppState> for Arc<ServerConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}

impl FromRef<AppState> for NotificationHub {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.hub.clone()
    }
}

impl FromRef<AppState> for BlobStore {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.blobs.clone()
    }
}
