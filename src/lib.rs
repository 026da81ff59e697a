//! fakecloud - Main Library
//!
//! fakecloud is a mock backend for a cloud document-sync and notification
//! service. Devices that expect the real cloud can be pointed at it: it hands
//! out canned tokens and service locations, keeps a single uploaded document
//! archive on disk, and pushes notifications to connected WebSocket clients.
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types, configuration and error types
//!   - Document and token request/response bodies
//!   - Notification messages pushed over the WebSocket
//!   - `ServerConfig` and its builder
//!
//! - **`backend`** - Server-side code (only compiled with the `server` feature)
//!   - Axum router and route handlers
//!   - Notification hub and WebSocket connections
//!   - Single-slot blob store
//!
//! # Feature Flags
//!
//! - **`server`** (default) - Enables the backend modules and the
//!   `fakecloud-server` binary.
//!
//! # Usage
//!
//! ```rust,no_run
//! use fakecloud::backend::server::init::create_app;
//! use fakecloud::shared::ServerConfig;
//!
//! # async fn example() -> Result<(), fakecloud::backend::BackendError> {
//! let config = ServerConfig::builder().build()?;
//! let app = create_app(config).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! Server state is shared through `Arc`, the notification hub through a
//! `tokio::sync::broadcast` channel, and blob writes are serialized behind a
//! `tokio::sync::Mutex`.

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "server")]
pub mod backend;
