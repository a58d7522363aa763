// ── Marketplace jobs ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::supporting::ApprovalStatus;
use super::{Moderated, Resource};

/// A service job posted on the marketplace.
///
/// Jobs go through the same approval workflow as providers: posted
/// `pending`, then approved or rejected by staff before going live.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category: String,
    pub status: ApprovalStatus,
    #[serde(default)]
    pub provider_id: Option<String>,
    #[serde(default)]
    pub budget: Option<f64>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Resource for Job {
    const NAME: &'static str = "jobs";
    const LABEL: &'static str = "Job";
    const FILTER_KEYS: &'static [&'static str] =
        &["search", "status", "category", "providerId"];

    type Draft = JobDraft;
    type Patch = JobPatch;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Moderated for Job {}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDraft {
    pub title: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}
