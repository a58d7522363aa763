// Hand-crafted async HTTP client for the Marine-Axis admin API (v1).
//
// Base path: /api/v1/
// Auth: `Authorization: Bearer <token>`, captured at login.
//
// Every endpoint answers the `{ success, data, total?, message? }` envelope;
// the helpers here strip it so callers only ever see unwrapped payloads.

use arc_swap::ArcSwapOption;
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::auth::{Credentials, PrincipalKind};
use crate::error::Error;
use crate::transport::TransportConfig;
use crate::types::{Envelope, LoginData, Page, PrincipalRecord};

// ── Error response shape ─────────────────────────────────────────────

/// Body shape for non-2xx responses (`success` may be absent).
#[derive(serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

// ── Client ───────────────────────────────────────────────────────────

/// Async client for the Marine-Axis admin API.
///
/// Generic over resource names: the same `list`/`get_by_id`/`create`/
/// `update`/`delete` calls serve every collection the admin panel manages
/// ("admins", "providers", "jobs", ...). The bearer token lives in a
/// process-wide slot written only by the session layer.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    timeout_secs: u64,
    token: ArcSwapOption<SecretString>,
}

impl ApiClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from a base URL and transport config.
    pub fn new(base_url: &str, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        let base_url = Self::normalize_base_url(base_url)?;

        Ok(Self {
            http,
            base_url,
            timeout_secs: transport.timeout.as_secs(),
            token: ArcSwapOption::empty(),
        })
    }

    /// Wrap an existing `reqwest::Client` (caller manages transport tuning).
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self {
            http,
            base_url,
            timeout_secs: 30,
            token: ArcSwapOption::empty(),
        })
    }

    /// Build the base URL with the `/api/v1/` suffix.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;

        // Strip trailing slash for uniform handling
        let path = url.path().trim_end_matches('/').to_owned();

        if path.ends_with("/api/v1") {
            url.set_path(&format!("{path}/"));
        } else {
            url.set_path(&format!("{path}/api/v1/"));
        }

        Ok(url)
    }

    // ── Token slot ───────────────────────────────────────────────────

    /// Install a bearer token (after login or silent restore).
    pub fn set_token(&self, token: SecretString) {
        self.token.store(Some(std::sync::Arc::new(token)));
    }

    /// Drop the bearer token (logout / expiry).
    pub fn clear_token(&self) {
        self.token.store(None);
    }

    /// Whether a bearer token is currently installed.
    pub fn has_token(&self) -> bool {
        self.token.load().is_some()
    }

    /// Snapshot of the current bearer token, for callers that persist it
    /// (session cache). Read-only consumers should not need this.
    pub fn token_snapshot(&self) -> Option<SecretString> {
        self.token.load_full().map(|token| (*token).clone())
    }

    fn authorize(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.token.load_full() {
            Some(token) => builder.bearer_auth(token.expose_secret()),
            None => builder,
        }
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Join a relative path (e.g. `"admins/42"`) onto the base URL.
    fn url(&self, path: &str) -> Url {
        // base_url always ends with `/api/v1/`, so joining relative paths works.
        self.base_url
            .join(path)
            .expect("path should be valid relative URL")
    }

    // ── Request plumbing ─────────────────────────────────────────────

    /// Send a request, mapping timeouts to a distinguishable error.
    async fn send(&self, builder: reqwest::RequestBuilder) -> Result<reqwest::Response, Error> {
        builder.send().await.map_err(|e| {
            if e.is_timeout() {
                Error::Timeout {
                    timeout_secs: self.timeout_secs,
                }
            } else {
                Error::Transport(e)
            }
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<Envelope<T>, Error> {
        let url = self.url(path);
        debug!("GET {url}");

        let resp = self
            .send(self.authorize(self.http.get(url).query(query)))
            .await?;
        read_envelope(resp).await
    }

    async fn post_json<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Envelope<T>, Error> {
        let url = self.url(path);
        debug!("POST {url}");

        let resp = self
            .send(self.authorize(self.http.post(url).json(body)))
            .await?;
        read_envelope(resp).await
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<Envelope<T>, Error> {
        let url = self.url(path);
        debug!("POST {url}");

        let resp = self.send(self.authorize(self.http.post(url))).await?;
        read_envelope(resp).await
    }

    async fn put_json<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Envelope<T>, Error> {
        let url = self.url(path);
        debug!("PUT {url}");

        let resp = self
            .send(self.authorize(self.http.put(url).json(body)))
            .await?;
        read_envelope(resp).await
    }

    async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<Envelope<T>, Error> {
        let url = self.url(path);
        debug!("DELETE {url}");

        let resp = self.send(self.authorize(self.http.delete(url))).await?;
        read_envelope(resp).await
    }

    // ━━ Public API ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    // ── Generic resource CRUD ────────────────────────────────────────

    /// List one page of a collection, with optional filter query params.
    pub async fn list<T: DeserializeOwned>(
        &self,
        resource: &str,
        page: u32,
        page_size: u32,
        filters: &[(String, String)],
    ) -> Result<Page<T>, Error> {
        let mut query: Vec<(String, String)> = vec![
            ("page".into(), page.to_string()),
            ("pageSize".into(), page_size.to_string()),
        ];
        query.extend(filters.iter().cloned());

        let envelope: Envelope<Vec<T>> = self.get_json(resource, &query).await?;
        let items = envelope.data.unwrap_or_default();
        let total = envelope
            .total
            .unwrap_or_else(|| u64::try_from(items.len()).unwrap_or(u64::MAX));

        Ok(Page { items, total })
    }

    /// Fetch a single item by id.
    pub async fn get_by_id<T: DeserializeOwned>(
        &self,
        resource: &str,
        id: &str,
    ) -> Result<T, Error> {
        let envelope: Envelope<T> = self.get_json(&format!("{resource}/{id}"), &[]).await?;
        require_data(envelope)
    }

    /// Create an item. Returns the created record when the server echoes it.
    pub async fn create<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        resource: &str,
        body: &B,
    ) -> Result<Option<T>, Error> {
        let envelope: Envelope<T> = self.post_json(resource, body).await?;
        Ok(envelope.data)
    }

    /// Update an item. Returns the updated record when the server echoes it.
    pub async fn update<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        resource: &str,
        id: &str,
        body: &B,
    ) -> Result<Option<T>, Error> {
        let envelope: Envelope<T> = self.put_json(&format!("{resource}/{id}"), body).await?;
        Ok(envelope.data)
    }

    /// Delete an item by id.
    pub async fn delete(&self, resource: &str, id: &str) -> Result<(), Error> {
        let _: Envelope<serde_json::Value> =
            self.delete_json(&format!("{resource}/{id}")).await?;
        Ok(())
    }

    // ── Approval workflow ────────────────────────────────────────────

    /// Approve a pending item (providers, jobs).
    pub async fn approve<T: DeserializeOwned>(
        &self,
        resource: &str,
        id: &str,
    ) -> Result<Option<T>, Error> {
        let envelope: Envelope<T> = self.post_empty(&format!("{resource}/{id}/approve")).await?;
        Ok(envelope.data)
    }

    /// Reject a pending item with a reason.
    pub async fn reject<T: DeserializeOwned>(
        &self,
        resource: &str,
        id: &str,
        reason: &str,
    ) -> Result<Option<T>, Error> {
        #[derive(Serialize)]
        struct Body<'a> {
            reason: &'a str,
        }

        let envelope: Envelope<T> = self
            .post_json(&format!("{resource}/{id}/reject"), &Body { reason })
            .await?;
        Ok(envelope.data)
    }

    // ── Singleton reads / writes ─────────────────────────────────────

    /// Fetch a singleton payload (e.g. `"dashboard/summary"`, `"settings"`).
    pub async fn get_singleton<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let envelope: Envelope<T> = self.get_json(path, &[]).await?;
        require_data(envelope)
    }

    /// Replace a singleton payload (e.g. `"settings"`).
    pub async fn put_singleton<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Option<T>, Error> {
        let envelope: Envelope<T> = self.put_json(path, body).await?;
        Ok(envelope.data)
    }

    // ── Authentication ───────────────────────────────────────────────

    /// Sign in on the given surface and install the returned bearer token.
    ///
    /// A 401/403 here means bad credentials, not an expired session --
    /// the error carries the server's message when one is present.
    pub async fn login(
        &self,
        kind: PrincipalKind,
        credentials: &Credentials,
    ) -> Result<LoginData, Error> {
        let url = self.url(kind.login_path());
        debug!("POST {url}");

        let body = serde_json::json!({
            "email": credentials.email,
            "password": credentials.password.expose_secret(),
        });

        let resp = self.send(self.http.post(url).json(&body)).await?;
        let status = resp.status();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            let raw = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&raw)
                .ok()
                .and_then(|b| b.message)
                .unwrap_or_else(|| "invalid email or password".into());
            return Err(Error::Authentication { message });
        }

        let envelope = match read_envelope::<LoginData>(resp).await {
            // Some deployments answer HTTP 200 + success:false for bad logins.
            Err(Error::Rejected { message }) => {
                return Err(Error::Authentication { message });
            }
            other => other?,
        };

        let data = require_data(envelope)?;
        self.set_token(SecretString::from(data.token.clone()));

        debug!("login successful");
        Ok(data)
    }

    /// End the current session.
    ///
    /// The local token is dropped even if the server call fails; token
    /// teardown must not depend on network reachability.
    pub async fn logout(&self, kind: PrincipalKind) -> Result<(), Error> {
        let url = self.url(kind.logout_path());
        debug!("POST {url}");

        let result = self.send(self.authorize(self.http.post(url))).await;
        self.clear_token();

        result.map(|_| ())
    }

    /// Fetch the current principal (silent session restore).
    pub async fn me(&self, kind: PrincipalKind) -> Result<PrincipalRecord, Error> {
        let envelope: Envelope<PrincipalRecord> =
            self.get_json(kind.profile_path(), &[]).await?;
        require_data(envelope)
    }

    /// Update the current principal's profile.
    pub async fn update_profile<B: Serialize + Sync>(
        &self,
        kind: PrincipalKind,
        body: &B,
    ) -> Result<PrincipalRecord, Error> {
        let envelope: Envelope<PrincipalRecord> =
            self.put_json(kind.profile_path(), body).await?;
        require_data(envelope)
    }
}

// ── Envelope handling ────────────────────────────────────────────────

/// Map status codes, parse the envelope, and reject `success: false`.
async fn read_envelope<T: DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<Envelope<T>, Error> {
    let status = resp.status();

    if status == StatusCode::UNAUTHORIZED {
        return Err(Error::SessionExpired);
    }

    if status == StatusCode::FORBIDDEN {
        let raw = resp.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&raw)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or_else(|| "insufficient permissions".into());
        return Err(Error::Forbidden { message });
    }

    if !status.is_success() {
        let raw = resp.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&raw)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or_else(|| status.to_string());
        return Err(Error::Api {
            status: status.as_u16(),
            message,
        });
    }

    let body = resp.text().await.map_err(Error::Transport)?;

    let envelope: Envelope<T> = serde_json::from_str(&body).map_err(|e| {
        let preview: String = body.chars().take(200).collect();
        Error::Deserialization {
            message: format!("{e} (body preview: {preview:?})"),
            body,
        }
    })?;

    if !envelope.success {
        return Err(Error::Rejected {
            message: envelope
                .message
                .unwrap_or_else(|| "request rejected by server".into()),
        });
    }

    Ok(envelope)
}

/// Unwrap `data`, failing loudly when a successful envelope omits it.
fn require_data<T>(envelope: Envelope<T>) -> Result<T, Error> {
    envelope.data.ok_or_else(|| Error::Deserialization {
        message: "successful envelope is missing its data field".into(),
        body: String::new(),
    })
}
