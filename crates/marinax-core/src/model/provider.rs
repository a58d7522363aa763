// ── Service providers ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::supporting::ApprovalStatus;
use super::{Moderated, Resource};

/// A marine-services provider listed on the marketplace.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub status: ApprovalStatus,
    /// Category slugs this provider offers services in.
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Resource for Provider {
    const NAME: &'static str = "providers";
    const LABEL: &'static str = "Provider";
    const FILTER_KEYS: &'static [&'static str] = &["search", "status", "category", "location"];

    type Draft = ProviderDraft;
    type Patch = ProviderPatch;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Moderated for Provider {}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderDraft {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}
