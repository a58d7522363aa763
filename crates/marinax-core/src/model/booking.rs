// ── Bookings and contracts ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Resource;

/// A customer booking against a provider's job listing.
///
/// Bookings are created customer-side; the admin panel reads, reschedules,
/// and cancels them but never creates one, so there is no draft type and
/// create goes through the customer surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    /// Human-facing booking reference ("MA-2024-0193").
    pub reference: String,
    pub provider_id: String,
    #[serde(default)]
    pub job_id: Option<String>,
    #[serde(default)]
    pub vessel_id: Option<String>,
    pub customer_email: String,
    /// "pending", "confirmed", "completed", "cancelled".
    pub status: String,
    #[serde(default)]
    pub scheduled_for: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Resource for Booking {
    const NAME: &'static str = "bookings";
    const LABEL: &'static str = "Booking";
    const FILTER_KEYS: &'static [&'static str] =
        &["search", "status", "providerId", "from", "to"];

    type Draft = serde_json::Value;
    type Patch = BookingPatch;

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_for: Option<DateTime<Utc>>,
}

/// A service contract drawn up from a confirmed booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub id: String,
    pub title: String,
    pub provider_id: String,
    #[serde(default)]
    pub booking_id: Option<String>,
    /// "draft", "active", "completed", "terminated".
    pub status: String,
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub signed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

impl Resource for Contract {
    const NAME: &'static str = "contracts";
    const LABEL: &'static str = "Contract";
    const FILTER_KEYS: &'static [&'static str] = &["search", "status", "providerId"];

    type Draft = ContractDraft;
    type Patch = ContractPatch;

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractDraft {
    pub title: String,
    pub provider_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}
