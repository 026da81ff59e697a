//! Server Module
//!
//! Initialization and configuration of the Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports and documentation
//! ├── state.rs  - AppState and FromRef implementations
//! ├── config.rs - Configuration loading (file + environment)
//! └── init.rs   - App creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `config::load_config` merges defaults, the
//!    TOML file and environment variables
//! 2. **State Creation**: notification hub and blob store
//! 3. **Router Creation**: all routes, middleware and the 404 fallback

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use config::load_config;
pub use init::create_app;
pub use state::AppState;
