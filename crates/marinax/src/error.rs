//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` variants into user-facing errors with actionable help
//! text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

use marinax_core::CoreError;

/// Exit codes per the CLI contract.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const PERMISSION: i32 = 5;
    pub const CONNECTION: i32 = 6;
    pub const TIMEOUT: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Authentication ───────────────────────────────────────────────

    #[error("Not signed in")]
    #[diagnostic(
        code(marinax::not_signed_in),
        help("Sign in on the {surface} surface first:\n  marinax login --kind {surface}")
    )]
    NotSignedIn { surface: String },

    #[error("Authentication failed: {message}")]
    #[diagnostic(
        code(marinax::auth_failed),
        help(
            "Verify your email and password.\n\
             Store a password with: marinax config set-password"
        )
    )]
    AuthFailed { message: String },

    #[error("Session expired")]
    #[diagnostic(
        code(marinax::session_expired),
        help("Sign in again with: marinax login")
    )]
    SessionExpired,

    // ── Authorization ────────────────────────────────────────────────

    #[error("Access denied: requires role {required}")]
    #[diagnostic(
        code(marinax::access_denied),
        help("Your account does not carry the required role. Ask a superadmin.")
    )]
    AccessDenied { required: String },

    #[error("Access denied: {message}")]
    #[diagnostic(code(marinax::forbidden))]
    Forbidden { message: String },

    // ── Connection ───────────────────────────────────────────────────

    #[error("Could not reach the Marine-Axis API")]
    #[diagnostic(
        code(marinax::connection_failed),
        help(
            "Check that the API is reachable and the URL is correct.\n\
             Reason: {reason}"
        )
    )]
    ConnectionFailed { reason: String },

    #[error("Request timed out after {seconds}s")]
    #[diagnostic(
        code(marinax::timeout),
        help("Increase the timeout with --timeout or check API responsiveness.")
    )]
    Timeout { seconds: u64 },

    // ── Resources ────────────────────────────────────────────────────

    #[error("{resource} '{id}' not found")]
    #[diagnostic(code(marinax::not_found))]
    NotFound { resource: String, id: String },

    #[error("Request rejected: {message}")]
    #[diagnostic(code(marinax::rejected))]
    Rejected { message: String },

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(marinax::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(marinax::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: marinax config init"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error("Configuration file not found")]
    #[diagnostic(
        code(marinax::no_config),
        help(
            "Create one with: marinax config init\n\
             Expected at: {path}"
        )
    )]
    NoConfig { path: String },

    #[error("{0}")]
    #[diagnostic(code(marinax::config))]
    Config(String),

    // ── IO / Internal ────────────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    #[diagnostic(code(marinax::internal))]
    Internal(String),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NotSignedIn { .. } | Self::AuthFailed { .. } | Self::SessionExpired => {
                exit_code::AUTH
            }
            Self::AccessDenied { .. } | Self::Forbidden { .. } => exit_code::PERMISSION,
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation { field, message } => CliError::Validation {
                field,
                reason: message,
            },
            CoreError::ConnectionFailed { reason } => CliError::ConnectionFailed { reason },
            CoreError::Timeout { timeout_secs } => CliError::Timeout {
                seconds: timeout_secs,
            },
            CoreError::AuthenticationFailed { message } => CliError::AuthFailed { message },
            CoreError::SessionExpired => CliError::SessionExpired,
            CoreError::AccessDenied { message } => CliError::Forbidden { message },
            CoreError::NotFound { resource, id } => CliError::NotFound { resource, id },
            CoreError::Rejected { message } => CliError::Rejected { message },
            CoreError::OwnAccountDeletion => CliError::Rejected {
                message: "you cannot delete the account you are signed in with".into(),
            },
            CoreError::Config { message } => CliError::Config(message),
            CoreError::Internal(message) => CliError::Internal(message),
        }
    }
}

// Inline field validation failures become usage errors; they never went
// near the network.
impl From<marinax_core::validate::FieldError> for CliError {
    fn from(err: marinax_core::validate::FieldError) -> Self {
        CliError::Validation {
            field: err.field,
            reason: err.message,
        }
    }
}

impl From<marinax_config::ConfigError> for CliError {
    fn from(err: marinax_config::ConfigError) -> Self {
        CliError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Internal(format!("JSON error: {err}"))
    }
}
