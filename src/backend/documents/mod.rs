//! Documents Module
//!
//! The email and page endpoints. Both accept whatever the device sends: the
//! email endpoint echoes the form into the log, the page endpoint returns a
//! static fixture file.

/// Document and page route handlers
pub mod handlers;

pub use handlers::{handle_document_email, handle_page};
