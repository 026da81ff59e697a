//! Real-time Notification Module
//!
//! Pushes notifications to devices over WebSockets.
//!
//! # Module Structure
//!
//! ```text
//! realtime/
//! ├── mod.rs       - Module exports and documentation
//! ├── hub.rs       - Client registry and broadcast
//! ├── websocket.rs - WebSocket upgrade and per-connection loop
//! └── notify.rs    - HTTP endpoints that trigger notifications
//! ```
//!
//! # Notification Flow
//!
//! 1. A device connects to `/notifications/ws/json/1` and is registered
//! 2. A route handler (or `/ntf/{msg}`) calls `NotificationHub::send`
//! 3. Every connection's writer task turns the notification into a text frame
//! 4. On disconnect the connection's receiver is dropped and the client
//!    disappears from the registry

/// Client registry and broadcast
pub mod hub;

/// WebSocket connection handling
pub mod websocket;

/// Notification trigger endpoints
pub mod notify;

pub use hub::NotificationHub;
pub use notify::{handle_notify, handle_test_notification};
pub use websocket::{handle_livesync_socket, handle_notification_socket};
