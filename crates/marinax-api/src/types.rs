// Wire types for the admin API envelope.
//
// Every endpoint answers `{ success, data, total?, message? }`. The client
// strips the envelope before callers see it; these types only surface in
// signatures as `Page<T>` and the auth records.

use serde::Deserialize;

/// The response envelope used by every Marine-Axis admin endpoint.
///
/// `success: false` with HTTP 2xx is a business-level rejection and is
/// distinct from a transport failure; both are mapped to errors by the
/// client before the caller sees the payload.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub message: Option<String>,
}

/// One page of a listed collection, in server order.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Total matching rows across all pages (for pagination UI).
    pub total: u64,
}

/// Wire record for an authenticated principal.
///
/// `role` stays a raw string here; `marinax-core` parses it into the
/// canonical `Role` enum.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrincipalRecord {
    pub id: String,
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Payload of a successful login.
///
/// The principal field is named `user` on the staff surface and
/// `provider` on the provider surface; both map here.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    pub token: String,
    #[serde(alias = "user", alias = "provider")]
    pub principal: PrincipalRecord,
}
