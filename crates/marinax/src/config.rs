//! Profile resolution with CLI flag overrides.
//!
//! `marinax-config` owns the file format and credential chain; this module
//! layers `GlobalOpts` on top and produces a ready-to-use API client.

use std::sync::Arc;
use std::time::Duration;

use marinax_config::Config;
use marinax_core::{ApiClient, CoreError, PrincipalKind, TlsMode, TransportConfig};

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// Name of the profile this invocation targets.
pub fn active_profile_name(global: &GlobalOpts, cfg: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| cfg.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Everything needed to open a session.
pub struct Connection {
    pub profile_name: String,
    pub kind: PrincipalKind,
    pub email: Option<String>,
    pub api: Arc<ApiClient>,
}

/// Build the API client from config file + CLI overrides.
///
/// `kind_override` is set by `login --kind`; every other command follows
/// the profile.
pub fn connect(
    global: &GlobalOpts,
    kind_override: Option<PrincipalKind>,
) -> Result<Connection, CliError> {
    let cfg = marinax_config::load_config_or_default();
    let profile_name = active_profile_name(global, &cfg);
    let profile = cfg.profiles.get(&profile_name);

    // A missing profile is fine as long as --api-url fills the gap.
    let api_url = match (global.api_url.as_deref(), profile) {
        (Some(url), _) => url.to_owned(),
        (None, Some(profile)) => profile.api_url.clone(),
        (None, None) => {
            if global.profile.is_some() {
                let mut available: Vec<&str> =
                    cfg.profiles.keys().map(String::as_str).collect();
                available.sort_unstable();
                return Err(CliError::ProfileNotFound {
                    name: profile_name,
                    available: available.join(", "),
                });
            }
            return Err(CliError::NoConfig {
                path: marinax_config::config_path().display().to_string(),
            });
        }
    };

    let mut transport = profile
        .map(|p| p.transport(&cfg.defaults))
        .unwrap_or_default();
    if global.insecure {
        transport.tls = TlsMode::DangerAcceptInvalid;
    }
    if let Some(timeout) = global.timeout {
        transport.timeout = Duration::from_secs(timeout);
    }

    let kind = kind_override
        .or_else(|| profile.map(|p| p.kind))
        .unwrap_or(PrincipalKind::Staff);
    let email = profile.and_then(|p| p.email.clone());

    let api = ApiClient::new(&api_url, &transport).map_err(CoreError::from)?;

    Ok(Connection {
        profile_name,
        kind,
        email,
        api: Arc::new(api),
    })
}
