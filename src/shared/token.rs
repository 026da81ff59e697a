//! Token and service discovery bodies.
use serde::{Deserialize, Serialize};

/// Service locator reply: where the device should send requests for a service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HostResponse {
    #[serde(rename = "Host")]
    pub host: String,
    #[serde(rename = "Status")]
    pub status: String,
}

impl HostResponse {
    pub fn ok(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            status: "OK".to_string(),
        }
    }
}

/// Device registration request (`POST /token/json/2/device/new`)
///
/// All three keys must be present; the values are only logged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeviceTokenRequest {
    /// One-time code shown to the user when pairing
    pub code: String,
    #[serde(rename = "deviceDesc")]
    pub device_desc: String,
    #[serde(rename = "deviceID")]
    pub device_id: String,
}
