//! Service Module
//!
//! Health check, service discovery and token stubs.

/// Service route handlers
pub mod handlers;

pub use handlers::{
    handle_device_delete, handle_device_new, handle_health, handle_ping, handle_service_locator,
    handle_user_new,
};
