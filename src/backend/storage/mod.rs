//! Document Storage Module
//!
//! The blob slot and the document-storage API stubs.
//!
//! # Module Structure
//!
//! ```text
//! storage/
//! ├── mod.rs      - Module exports and documentation
//! ├── blob.rs     - Single-slot blob file
//! └── handlers.rs - Upload request, upload/download, status, delete, listing
//! ```

/// Single-slot blob store
pub mod blob;

/// Document storage route handlers
pub mod handlers;

pub use blob::BlobStore;
pub use handlers::{
    handle_blob_download, handle_blob_upload, handle_delete, handle_list_documents,
    handle_update_status, handle_upload_request,
};
