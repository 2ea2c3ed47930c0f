use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub customer_name: String,
    pub pet_name: String,
    pub service_name: String,
    pub provider_name: Option<String>,
    /// pending / confirmed / in_progress / completed / cancelled
    pub status: String,
    pub scheduled_at: String,
    pub total_amount: f64,
    pub note: Option<String>,
    pub created_at: String,
}

/// Admins only move a booking through its statuses and annotate it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingDto {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
