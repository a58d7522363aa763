// ── Session lifecycle ──
//
// One explicit session object per running app, bound to a single login
// surface at construction. Owns the principal and the api client's token
// slot: login installs both, logout tears both down, restore rebuilds
// them silently from a cached token on startup. Stores read the token
// through the client; they never touch it.

use std::sync::Arc;

use secrecy::SecretString;
use serde::Serialize;
use tokio::sync::watch;
use tracing::{debug, info};

use marinax_api::{ApiClient, Credentials, PrincipalKind, PrincipalRecord};

use crate::access::{Principal, Role};
use crate::error::CoreError;

/// Partial update for the signed-in principal's own profile.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Cheaply cloneable session handle.
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    api: Arc<ApiClient>,
    kind: PrincipalKind,
    principal: watch::Sender<Option<Arc<Principal>>>,
}

impl Session {
    pub fn new(api: Arc<ApiClient>, kind: PrincipalKind) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                api,
                kind,
                principal: watch::Sender::new(None),
            }),
        }
    }

    pub fn kind(&self) -> PrincipalKind {
        self.inner.kind
    }

    pub fn api(&self) -> &Arc<ApiClient> {
        &self.inner.api
    }

    pub fn principal(&self) -> Option<Arc<Principal>> {
        self.inner.principal.borrow().clone()
    }

    /// Subscribe to principal changes (login, logout, profile updates).
    pub fn subscribe(&self) -> watch::Receiver<Option<Arc<Principal>>> {
        self.inner.principal.subscribe()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.principal.borrow().is_some()
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.inner
            .principal
            .borrow()
            .as_ref()
            .is_some_and(|p| p.role == role)
    }

    // ── Lifecycle ────────────────────────────────────────────────────

    /// Sign in on this session's surface.
    pub async fn login(
        &self,
        email: &str,
        password: SecretString,
    ) -> Result<Arc<Principal>, CoreError> {
        let credentials = Credentials::new(email, password);
        let data = self.inner.api.login(self.inner.kind, &credentials).await?;

        let principal = Arc::new(principal_from_record(self.inner.kind, &data.principal)?);
        self.inner.principal.send_replace(Some(principal.clone()));

        info!(email = %principal.email, role = %principal.role, "signed in");
        Ok(principal)
    }

    /// Sign out. Local teardown happens regardless of whether the server
    /// call lands; the token must not outlive the session.
    pub async fn logout(&self) -> Result<(), CoreError> {
        let result = self.inner.api.logout(self.inner.kind).await;
        self.inner.principal.send_replace(None);
        debug!("signed out");
        result.map_err(CoreError::from)
    }

    /// Silent restore from a cached token on startup.
    ///
    /// Installs the token, then asks the server who it belongs to. A
    /// rejected token is dropped so the app starts signed out instead of
    /// half-authenticated.
    pub async fn restore(&self, token: SecretString) -> Result<Arc<Principal>, CoreError> {
        self.inner.api.set_token(token);

        match self.inner.api.me(self.inner.kind).await {
            Ok(record) => {
                let principal = Arc::new(principal_from_record(self.inner.kind, &record)?);
                self.inner.principal.send_replace(Some(principal.clone()));
                debug!(email = %principal.email, "session restored");
                Ok(principal)
            }
            Err(err) => {
                self.inner.api.clear_token();
                Err(err.into())
            }
        }
    }

    /// Update the signed-in principal's profile and refresh the local copy.
    pub async fn update_profile(&self, patch: &ProfilePatch) -> Result<Arc<Principal>, CoreError> {
        let record = self
            .inner
            .api
            .update_profile(self.inner.kind, patch)
            .await?;

        let principal = Arc::new(principal_from_record(self.inner.kind, &record)?);
        self.inner.principal.send_replace(Some(principal.clone()));
        Ok(principal)
    }

    /// Drop local auth state after the server reports the session expired.
    pub fn invalidate(&self) {
        self.inner.api.clear_token();
        self.inner.principal.send_replace(None);
    }
}

fn principal_from_record(
    kind: PrincipalKind,
    record: &PrincipalRecord,
) -> Result<Principal, CoreError> {
    let role = Role::parse(&record.role).ok_or_else(|| {
        CoreError::Internal(format!("unknown role '{}' in principal record", record.role))
    })?;

    Ok(Principal {
        id: record.id.clone(),
        email: record.email.clone(),
        role,
        kind,
        name: record.name.clone(),
    })
}
