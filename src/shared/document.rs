/**
 * Document Storage Bodies
 *
 * JSON bodies exchanged on the `/document-storage/json/2/...` endpoints.
 * Field names follow the cloud's capitalised wire format (`ID`, `BlobURLPut`,
 * `VissibleName` with its historical spelling), so every field carries an
 * explicit serde rename.
 */
use chrono::{DateTime, Duration, SecondsFormat, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;

/// ID of the single document the listing endpoint reports
pub const SAMPLE_DOCUMENT_ID: &str = "01c8689d-b135-468a-924d-0b79456bc6ae";

/// Expiry reported when no blob URL was requested (Go's zero time)
pub const ZERO_TIME: &str = "0001-01-01T00:00:00Z";

/// How long a download URL handed out with `withBlob=true` stays valid
const BLOB_URL_TTL_MINUTES: i64 = 5;

/// Entry of an upload request (`PUT /document-storage/json/2/upload/request`)
///
/// Devices send a list of these before uploading archives. Everything is
/// optional; an entry without an ID gets one assigned by the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UploadRequest {
    #[serde(rename = "ID", default)]
    pub id: String,
    #[serde(rename = "Parent", default)]
    pub parent: String,
    #[serde(rename = "Type", default)]
    pub doc_type: String,
    #[serde(rename = "Version", default)]
    pub version: i64,
}

/// Reply entry telling the device where to PUT the archive
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UploadResponse {
    #[serde(rename = "BlobURLPut")]
    pub blob_url_put: String,
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Message")]
    pub message: String,
    #[serde(rename = "Success")]
    pub success: bool,
    #[serde(rename = "Version")]
    pub version: i64,
}

impl UploadResponse {
    /// Build the reply for one document, pointing at `<storage_url>/upload`
    pub fn new(id: impl Into<String>, storage_url: &str) -> Self {
        let id = id.into();
        Self {
            blob_url_put: format!("{}/upload?id={}", storage_url.trim_end_matches('/'), id),
            id,
            message: String::new(),
            success: true,
            version: 1,
        }
    }
}

/// Per-document result of update-status and delete
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusResponse {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Message")]
    pub message: String,
    #[serde(rename = "Success")]
    pub success: bool,
    #[serde(rename = "Version")]
    pub version: i64,
}

impl StatusResponse {
    /// Successful result for a document
    pub fn ok(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            message: String::new(),
            success: true,
            version: 0,
        }
    }
}

/// Request body entry that only names a document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IdRequest {
    #[serde(rename = "ID")]
    pub id: String,
}

/// Metadata a device reports after uploading an archive
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateStatusRequest {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Parent", default)]
    pub parent: String,
    #[serde(rename = "Version", default)]
    pub version: i64,
    #[serde(rename = "Message", default)]
    pub message: String,
    #[serde(rename = "Success", default)]
    pub success: bool,
    #[serde(rename = "ModifiedClient", default)]
    pub modified_client: String,
    #[serde(rename = "Type", default)]
    pub doc_type: String,
    #[serde(rename = "VissibleName", default)]
    pub visible_name: String,
    #[serde(rename = "CurrentPage", default)]
    pub current_page: i64,
    #[serde(rename = "Bookmarked", default)]
    pub bookmarked: bool,
}

/// Document record as returned by the docs listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawDocument {
    #[serde(rename = "BlobURLGet")]
    pub blob_url_get: String,
    #[serde(rename = "BlobURLGetExpires")]
    pub blob_url_get_expires: String,
    #[serde(rename = "Bookmarked")]
    pub bookmarked: bool,
    #[serde(rename = "CurrentPage")]
    pub current_page: i64,
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Message")]
    pub message: String,
    #[serde(rename = "ModifiedClient")]
    pub modified_client: String,
    #[serde(rename = "Parent")]
    pub parent: String,
    #[serde(rename = "Success")]
    pub success: bool,
    #[serde(rename = "Type")]
    pub doc_type: String,
    #[serde(rename = "Version")]
    pub version: i64,
    #[serde(rename = "VissibleName")]
    pub visible_name: String,
}

impl RawDocument {
    /// The hardcoded document served by the listing endpoint
    ///
    /// # Arguments
    ///
    /// * `host` - Cloud host name used in the download URL
    /// * `doc_id` - Value of the `docId` query parameter (may be empty)
    /// * `with_blob` - Whether the device asked for a download URL expiry
    /// * `now` - Current time, used to compute the expiry
    pub fn sample(host: &str, doc_id: &str, with_blob: bool, now: DateTime<Utc>) -> Self {
        let blob_url_get_expires = if with_blob {
            (now + Duration::minutes(BLOB_URL_TTL_MINUTES)).to_rfc3339_opts(SecondsFormat::AutoSi, true)
        } else {
            ZERO_TIME.to_string()
        };

        Self {
            blob_url_get: format!("https://{}/download?id={}", host, doc_id),
            blob_url_get_expires,
            bookmarked: false,
            current_page: 0,
            id: SAMPLE_DOCUMENT_ID.to_string(),
            message: String::new(),
            modified_client: "2020-03-27T20:04:46.303303Z".to_string(),
            parent: String::new(),
            success: true,
            doc_type: "DocumentType".to_string(),
            version: 4,
            visible_name: "Stuff".to_string(),
        }
    }
}

/// Decode a JSON array body
///
/// An empty body or a literal `null` decodes to an empty list, matching
/// devices that send nothing when they have nothing to report.
pub fn decode_list<T: DeserializeOwned>(body: &[u8]) -> Result<Vec<T>, SharedError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }
    let items: Option<Vec<T>> = serde_json::from_slice(body)?;
    Ok(items.unwrap_or_default())
}
