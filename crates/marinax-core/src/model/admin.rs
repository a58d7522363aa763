// ── Staff accounts ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::access::Role;

use super::Resource;

/// A platform staff account (admin or superadmin).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_login: Option<DateTime<Utc>>,
}

impl Resource for Admin {
    const NAME: &'static str = "admins";
    const LABEL: &'static str = "Admin";
    const FILTER_KEYS: &'static [&'static str] = &["search", "role"];

    type Draft = AdminDraft;
    type Patch = AdminPatch;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Payload for inviting a new staff account.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDraft {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}
