//! Route Configuration Module
//!
//! Configures all HTTP routes. Each route group has a `configure_*_routes`
//! function that adds its routes to a `Router<AppState>`; `router` assembles
//! them and adds layers and the 404 fallback.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs                  - Module exports and documentation
//! ├── router.rs               - Router assembly, layers, fallback
//! ├── service_routes.rs       - Health, discovery, tokens
//! ├── notification_routes.rs  - WebSockets and notification triggers
//! └── storage_routes.rs       - Document storage, blob slot, documents
//! ```

/// Main router creation
pub mod router;

/// Health, discovery and token routes
pub mod service_routes;

/// WebSocket and notification routes
pub mod notification_routes;

/// Document storage routes
pub mod storage_routes;

pub use router::create_router;
