/**
 * Backend Error Types
 *
 * Errors returned by route handlers. Every variant maps to an HTTP status
 * code so handlers can return `Result<_, BackendError>` and use `?`.
 *
 * # Error Categories
 *
 * ## Handler Errors
 *
 * Bad input from the device: malformed JSON, missing keys or headers,
 * malformed multipart bodies. Carry their own status code.
 *
 * ## Not Found
 *
 * A file the route serves (blob slot, page fixture) does not exist yet.
 *
 * ## I/O and Configuration
 *
 * Filesystem failures while reading or writing the data directory, and
 * invalid configuration at startup.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::{ConfigError, SharedError};

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use axum::http::StatusCode;
/// use fakecloud::backend::error::BackendError;
///
/// let err = BackendError::handler(StatusCode::BAD_REQUEST, "missing Authorization header");
/// let err = BackendError::not_found("blob");
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error (e.g., missing headers, invalid request)
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// A file served by a route does not exist
    #[error("Not found: {resource}")]
    NotFound {
        /// What was missing
        resource: String,
    },

    /// Shared error (wire body decoding and validation)
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Create a 400 Bad Request handler error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::BAD_REQUEST, message)
    }

    /// Create a new not-found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Wrap an I/O error on a served file, turning a missing file into `NotFound`
    pub fn file(err: std::io::Error, resource: impl Into<String>) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::not_found(resource)
        } else {
            Self::Io(err)
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `NotFound` - 404 Not Found
    /// - `SharedError` - 400 Bad Request (the device sent something we can't use)
    /// - `Io` - 404 if the file is missing, 500 otherwise
    /// - `Config` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::SharedError(_) => StatusCode::BAD_REQUEST,
            Self::Io(err) if err.kind() == std::io::ErrorKind::NotFound => StatusCode::NOT_FOUND,
            Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::NotFound { resource } => format!("{} not found", resource),
            Self::SharedError(err) => err.to_string(),
            Self::Io(err) => err.to_string(),
            Self::Config(err) => err.to_string(),
        }
    }
}
