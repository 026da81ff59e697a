//! Backend Module
//!
//! All server-side code: an Axum HTTP server that stands in for the
//! document cloud, pushing notifications to devices over WebSockets and
//! holding a single uploaded archive on disk.
//!
//! This module is only compiled when the `server` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Configuration loading, application state, app creation
//! - **`routes`** - Route groups, layers and the 404 fallback
//! - **`service`** - Health check, service discovery, token stubs
//! - **`realtime`** - Notification hub and WebSocket connections
//! - **`storage`** - Blob slot and document-storage API
//! - **`documents`** - Email and page endpoints
//! - **`middleware`** - Request logging
//! - **`error`** - Backend error type and its HTTP conversion
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Binary entry point
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── service/        - Discovery and tokens
//! ├── realtime/       - Notification hub and sockets
//! ├── storage/        - Blob slot and storage API
//! ├── documents/      - Email and page stubs
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds the configuration, the `NotificationHub` and the
//! `BlobStore`. All three are cheap to clone and handlers extract only the
//! part they need through `FromRef`.
//!
//! # Example
//!
//! ```rust,no_run
//! use fakecloud::backend::server::{create_app, load_config};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config()?;
//! let port = config.port;
//! let app = create_app(config).await?;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Health, discovery and token handlers
pub mod service;

/// Real-time notification system
pub mod realtime;

/// Document storage
pub mod storage;

/// Email and page handlers
pub mod documents;

/// Middleware for request processing
pub mod middleware;

/// Backend error types
pub mod error;

pub use error::BackendError;
pub use realtime::NotificationHub;
pub use server::{create_app, load_config, AppState};
pub use storage::BlobStore;
