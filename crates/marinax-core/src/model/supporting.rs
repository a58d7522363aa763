// ── Supporting types ──
//
// Shared enums and read-only payloads that back the dashboard and
// settings screens. None of these are listable collections.

use serde::{Deserialize, Serialize};

/// Moderation state shared by providers and jobs.
///
/// New submissions start `Pending` and move to `Approved` or `Rejected`
/// through the approval workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApprovalStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregate counters for the dashboard screen (read-only).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_providers: u64,
    pub pending_providers: u64,
    pub total_jobs: u64,
    pub pending_jobs: u64,
    pub total_bookings: u64,
    pub active_contracts: u64,
    pub total_vessels: u64,
    #[serde(default)]
    pub revenue_this_month: Option<f64>,
}

/// Site-wide settings singleton.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    pub site_name: String,
    pub support_email: String,
    #[serde(default)]
    pub maintenance_mode: bool,
    #[serde(default)]
    pub provider_auto_approval: bool,
    #[serde(default)]
    pub booking_lead_time_hours: Option<u32>,
}

/// Partial update for [`SiteSettings`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettingsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_auto_approval: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_lead_time_hours: Option<u32>,
}
