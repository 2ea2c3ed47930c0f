use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub body: String,
    /// system / promotion / booking / payment
    #[serde(rename = "type")]
    pub kind: String,
    pub recipient_id: Option<String>,
    pub is_read: bool,
    pub created_at: String,
}

/// Broadcast (no recipient) or targeted notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendNotificationDto {
    pub title: String,
    pub body: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_id: Option<String>,
}
