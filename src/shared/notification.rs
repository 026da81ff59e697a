/**
 * Notification Messages
 *
 * Values pushed to connected WebSocket clients. Two kinds exist:
 * - plain text frames triggered by `GET /ntf/{msg}`
 * - document events (`DocAdded`, `DocDeleted`) serialized as the cloud's
 *   pub/sub envelope (`WsMessage`)
 *
 * The envelope carries several fixed identifiers (user, source device,
 * subscription) because the mock has no users or devices of its own.
 */
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::document::UpdateStatusRequest;

const MESSAGE_ID: &str = "1234";
const AUTH0_USER_ID: &str = "auth0|12341234123412";
const SOURCE_DEVICE_DESC: &str = "some-client";
const SOURCE_DEVICE_ID: &str = "12345";
const SUBSCRIPTION: &str = "dummy-subscription";

/// Something the hub fans out to every connected client
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    /// Raw text frame
    Text(String),
    /// Document event, sent as a JSON text frame
    Document(Box<WsMessage>),
}

impl Notification {
    /// Render the notification as the text of a WebSocket frame
    pub fn to_frame(&self) -> Result<String, serde_json::Error> {
        match self {
            Self::Text(text) => Ok(text.clone()),
            Self::Document(message) => serde_json::to_string(message),
        }
    }
}

/// Kind of document event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentEvent {
    DocAdded,
    DocDeleted,
}

impl DocumentEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DocAdded => "DocAdded",
            Self::DocDeleted => "DocDeleted",
        }
    }
}

/// Pub/sub envelope pushed to clients
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WsMessage {
    pub message: NotificationMessage,
    pub subscription: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotificationMessage {
    pub attributes: Attributes,
    #[serde(rename = "messageId")]
    pub message_id: String,
    #[serde(rename = "message_id")]
    pub message_id_snake: String,
    #[serde(rename = "publishTime")]
    pub publish_time: String,
    #[serde(rename = "publish_time")]
    pub publish_time_snake: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Attributes {
    #[serde(rename = "auth0UserID")]
    pub auth0_user_id: String,
    pub bookmarked: bool,
    pub event: String,
    pub id: String,
    pub parent: String,
    #[serde(rename = "sourceDeviceDesc")]
    pub source_device_desc: String,
    #[serde(rename = "sourceDeviceID")]
    pub source_device_id: String,
    #[serde(rename = "type")]
    pub doc_type: String,
    /// Document version, stringified on the wire
    pub version: String,
    #[serde(rename = "vissibleName")]
    pub visible_name: String,
}

impl WsMessage {
    /// Build a document event envelope stamped with the current time
    pub fn document(event: DocumentEvent, doc: &UpdateStatusRequest) -> Self {
        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Nanos, true);
        Self {
            message: NotificationMessage {
                attributes: Attributes {
                    auth0_user_id: AUTH0_USER_ID.to_string(),
                    bookmarked: doc.bookmarked,
                    event: event.as_str().to_string(),
                    id: doc.id.clone(),
                    parent: doc.parent.clone(),
                    source_device_desc: SOURCE_DEVICE_DESC.to_string(),
                    source_device_id: SOURCE_DEVICE_ID.to_string(),
                    doc_type: doc.doc_type.clone(),
                    version: doc.version.to_string(),
                    visible_name: doc.visible_name.clone(),
                },
                message_id: MESSAGE_ID.to_string(),
                message_id_snake: MESSAGE_ID.to_string(),
                publish_time: now.clone(),
                publish_time_snake: now,
            },
            subscription: SUBSCRIPTION.to_string(),
        }
    }
}

impl From<String> for Notification {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<WsMessage> for Notification {
    fn from(message: WsMessage) -> Self {
        Self::Document(Box::new(message))
    }
}
