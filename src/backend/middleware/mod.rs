//! Middleware Module
//!
//! Request processing middleware applied to every route.

/// Request logging
pub mod logging;

pub use logging::log_requests;
