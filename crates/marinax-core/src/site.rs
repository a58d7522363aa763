// ── Dashboard and site settings ──
//
// Read-mostly singleton payloads backing the overview and settings
// screens. No store is needed: there is no collection state, just a
// fetch (and one guarded write for settings).

use marinax_api::ApiClient;

use crate::error::CoreError;
use crate::model::{DashboardSummary, SiteSettings, SiteSettingsPatch};

/// Fetch the aggregate counters for the dashboard screen.
pub async fn dashboard_summary(api: &ApiClient) -> Result<DashboardSummary, CoreError> {
    api.get_singleton("dashboard/summary")
        .await
        .map_err(CoreError::from)
}

/// Fetch the site-wide settings singleton.
pub async fn site_settings(api: &ApiClient) -> Result<SiteSettings, CoreError> {
    api.get_singleton("settings").await.map_err(CoreError::from)
}

/// Apply a partial settings update, returning the server's new copy.
pub async fn update_site_settings(
    api: &ApiClient,
    patch: &SiteSettingsPatch,
) -> Result<SiteSettings, CoreError> {
    let echoed: Option<SiteSettings> = api.put_singleton("settings", patch).await?;

    match echoed {
        Some(settings) => Ok(settings),
        // Some deployments answer writes with a bare success envelope.
        None => site_settings(api).await,
    }
}
