//! Shared configuration for Marine-Axis admin tools.
//!
//! TOML profiles, credential resolution (keyring + env + plaintext), and
//! the on-disk token cache that backs silent session restore. The CLI
//! adds flag-aware wrappers on top; nothing here reads CLI arguments.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use marinax_api::{PrincipalKind, TlsMode, TransportConfig};

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no password configured for profile '{profile}'")]
    NoCredentials { profile: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name.
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named API profiles (staging, production, ...).
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,

    #[serde(default)]
    pub insecure: bool,

    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            insecure: false,
            timeout: default_timeout(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}
fn default_timeout() -> u64 {
    30
}

/// A named API profile.
#[derive(Debug, Deserialize, Serialize)]
pub struct Profile {
    /// API base URL (e.g., "https://api.marine-axis.io").
    pub api_url: String,

    /// Which login surface this profile signs in on.
    #[serde(default = "default_kind")]
    pub kind: PrincipalKind,

    /// Login email.
    pub email: Option<String>,

    /// Password (plaintext -- prefer keyring or env var).
    pub password: Option<String>,

    /// Environment variable name containing the password.
    pub password_env: Option<String>,

    /// Path to custom CA certificate.
    pub ca_cert: Option<PathBuf>,

    /// Accept self-signed TLS certificates.
    pub insecure: Option<bool>,

    /// Override request timeout (seconds).
    pub timeout: Option<u64>,
}

fn default_kind() -> PrincipalKind {
    PrincipalKind::Staff
}

impl Profile {
    /// Build the transport config for this profile.
    pub fn transport(&self, defaults: &Defaults) -> TransportConfig {
        let tls = if self.insecure.unwrap_or(defaults.insecure) {
            TlsMode::DangerAcceptInvalid
        } else if let Some(ref ca_path) = self.ca_cert {
            TlsMode::CustomCa(ca_path.clone())
        } else {
            TlsMode::System
        };

        TransportConfig {
            tls,
            timeout: Duration::from_secs(self.timeout.unwrap_or(defaults.timeout)),
        }
    }
}

// ── Config file path ────────────────────────────────────────────────

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("io", "marine-axis", "marinax")
}

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    project_dirs().map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("marinax");
    p
}

// ── Config loading / saving ─────────────────────────────────────────

/// Load the full Config from file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    let path = config_path();

    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(&path))
        .merge(Env::prefixed("MARINAX_").split("_"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if the file doesn't exist.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(&path, toml_str)?;
    Ok(())
}

// ── Credential resolution ───────────────────────────────────────────

/// Resolve a profile's password from the credential chain.
///
/// Order: profile's `password_env` variable, then `MARINAX_PASSWORD`,
/// then the OS keyring, then plaintext in the config file.
pub fn resolve_password(profile: &Profile, profile_name: &str) -> Result<SecretString, ConfigError> {
    if let Some(ref env_name) = profile.password_env {
        if let Ok(val) = std::env::var(env_name) {
            return Ok(SecretString::from(val));
        }
    }

    if let Ok(val) = std::env::var("MARINAX_PASSWORD") {
        return Ok(SecretString::from(val));
    }

    if let Ok(entry) = keyring::Entry::new("marinax", &format!("{profile_name}/password")) {
        if let Ok(secret) = entry.get_password() {
            return Ok(SecretString::from(secret));
        }
    }

    if let Some(ref password) = profile.password {
        return Ok(SecretString::from(password.clone()));
    }

    Err(ConfigError::NoCredentials {
        profile: profile_name.into(),
    })
}

/// Store a password in the OS keyring for the given profile.
pub fn store_password(profile_name: &str, password: &SecretString) -> Result<(), ConfigError> {
    let entry = keyring::Entry::new("marinax", &format!("{profile_name}/password")).map_err(
        |e| ConfigError::Validation {
            field: "keyring".into(),
            reason: e.to_string(),
        },
    )?;
    entry
        .set_password(password.expose_secret())
        .map_err(|e| ConfigError::Validation {
            field: "keyring".into(),
            reason: e.to_string(),
        })
}

// ── Token cache ─────────────────────────────────────────────────────
//
// Bearer tokens are short-lived; caching one per profile enables silent
// session restore on startup. The cache lives in the platform state dir
// with owner-only permissions.

fn token_cache_dir() -> PathBuf {
    project_dirs().map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("tokens");
            p
        },
        |dirs| {
            dirs.state_dir()
                .unwrap_or_else(|| dirs.cache_dir())
                .join("tokens")
        },
    )
}

/// Path of the cached token for a profile.
pub fn token_cache_path(profile_name: &str) -> PathBuf {
    token_cache_dir().join(format!("{profile_name}.token"))
}

/// Persist a session token for later silent restore.
pub fn save_token(profile_name: &str, token: &SecretString) -> Result<(), ConfigError> {
    let path = token_cache_path(profile_name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, token.expose_secret())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o600))?;
    }

    Ok(())
}

/// Read a cached session token, if any.
pub fn load_token(profile_name: &str) -> Option<SecretString> {
    let raw = std::fs::read_to_string(token_cache_path(profile_name)).ok()?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(SecretString::from(trimmed.to_owned()))
}

/// Remove a cached session token (logout, expiry).
pub fn clear_token(profile_name: &str) -> Result<(), ConfigError> {
    match std::fs::remove_file(token_cache_path(profile_name)) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn profile_toml_round_trip() {
        let toml_str = r#"
            api_url = "https://api.marine-axis.io"
            kind = "provider"
            email = "dock@harbor.example"
            insecure = true
            timeout = 10
        "#;

        let profile: Profile = toml::from_str(toml_str).unwrap();
        assert_eq!(profile.kind, PrincipalKind::Provider);
        assert_eq!(profile.timeout, Some(10));

        let transport = profile.transport(&Defaults::default());
        assert_eq!(transport.timeout, Duration::from_secs(10));
        assert!(matches!(transport.tls, TlsMode::DangerAcceptInvalid));
    }

    #[test]
    fn profile_kind_defaults_to_staff() {
        let profile: Profile = toml::from_str(r#"api_url = "https://api.marine-axis.io""#).unwrap();
        assert_eq!(profile.kind, PrincipalKind::Staff);
    }

    #[test]
    fn plaintext_password_is_the_last_resort() {
        let profile: Profile = toml::from_str(
            r#"
            api_url = "https://api.marine-axis.io"
            password = "anchor2024"
        "#,
        )
        .unwrap();

        let secret = resolve_password(&profile, "config-test-profile").unwrap();
        assert_eq!(secret.expose_secret(), "anchor2024");
    }

    #[test]
    fn missing_password_reports_the_profile() {
        let profile: Profile =
            toml::from_str(r#"api_url = "https://api.marine-axis.io""#).unwrap();

        let err = resolve_password(&profile, "empty-profile").unwrap_err();
        assert!(err.to_string().contains("empty-profile"));
    }
}
