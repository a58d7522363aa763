// ── Core error types ──
//
// User-facing errors from marinax-core. Consumers never see HTTP status
// codes or JSON parse failures directly; the `From<marinax_api::Error>`
// impl translates transport-layer errors into domain-appropriate variants.
// Nothing here is fatal -- every failure is recoverable by retrying the
// user action.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Input errors ─────────────────────────────────────────────────
    #[error("Invalid {field}: {message}")]
    Validation { field: String, message: String },

    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot reach the Marine-Axis API: {reason}")]
    ConnectionFailed { reason: String },

    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    // ── Authentication / authorization ───────────────────────────────
    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("Session expired -- sign in again")]
    SessionExpired,

    #[error("Access denied: {message}")]
    AccessDenied { message: String },

    // ── Data errors ──────────────────────────────────────────────────
    #[error("{resource} not found: {id}")]
    NotFound { resource: String, id: String },

    /// The server received the request and refused it with a message.
    #[error("{message}")]
    Rejected { message: String },

    // ── Account safety ───────────────────────────────────────────────
    #[error("You cannot delete the account you are signed in with")]
    OwnAccountDeletion,

    // ── Configuration ────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Internal ─────────────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Whether this failure never reached the server (network down,
    /// timeout) as opposed to being a server-reported rejection.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::ConnectionFailed { .. } | Self::Timeout { .. })
    }

    /// Whether re-authenticating might resolve this failure.
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::AuthenticationFailed { .. } | Self::SessionExpired)
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<marinax_api::Error> for CoreError {
    fn from(err: marinax_api::Error) -> Self {
        match err {
            marinax_api::Error::Authentication { message } => {
                CoreError::AuthenticationFailed { message }
            }
            marinax_api::Error::SessionExpired => CoreError::SessionExpired,
            marinax_api::Error::Forbidden { message } => CoreError::AccessDenied { message },
            marinax_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout { timeout_secs: 0 }
                } else {
                    CoreError::ConnectionFailed {
                        reason: e.to_string(),
                    }
                }
            }
            marinax_api::Error::Timeout { timeout_secs } => CoreError::Timeout { timeout_secs },
            marinax_api::Error::Tls(reason) => CoreError::ConnectionFailed {
                reason: format!("TLS error: {reason}"),
            },
            marinax_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            marinax_api::Error::Api { status: 404, message } => CoreError::NotFound {
                resource: "resource".into(),
                id: message,
            },
            marinax_api::Error::Api { message, .. }
            | marinax_api::Error::Rejected { message } => CoreError::Rejected { message },
            marinax_api::Error::Deserialization { message, body: _ } => {
                CoreError::Internal(format!("Unexpected response shape: {message}"))
            }
        }
    }
}
