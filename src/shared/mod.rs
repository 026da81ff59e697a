//! Shared Module
//!
//! Types that describe what goes over the wire: the JSON bodies the device
//! sends and receives, and the notification messages pushed over the
//! WebSocket. Also holds the server configuration and shared error types.
//!
//! Nothing in here depends on the server runtime, so the types can be used by
//! test clients as well.

/// Document storage request/response bodies
pub mod document;

/// Token and service discovery bodies
pub mod token;

/// WebSocket notification messages
pub mod notification;

/// Shared error types
pub mod error;

/// Server configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use config::{ConfigError, ServerConfig, ServerConfigBuilder};
pub use document::{
    IdRequest, RawDocument, StatusResponse, UpdateStatusRequest, UploadRequest, UploadResponse,
};
pub use error::SharedError;
pub use notification::{DocumentEvent, Notification, WsMessage};
pub use token::{DeviceTokenRequest, HostResponse};
