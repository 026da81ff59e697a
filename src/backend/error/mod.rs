//! Backend Error Module
//!
//! Error types returned by route handlers and server initialization.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! All errors render as `{"error": ..., "status": ...}` JSON. The unmatched
//! route fallback is separate and keeps the cloud's `{"Error":"not found"}`
//! body (see `routes::router`).

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::BackendError;
