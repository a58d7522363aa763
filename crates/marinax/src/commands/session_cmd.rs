//! Session command handlers: login, logout, whoami, profile.

use secrecy::SecretString;
use serde::Serialize;

use marinax_core::{validate, ProfilePatch};

use super::{util, Context};
use crate::cli::{GlobalOpts, LoginArgs, ProfileArgs, ProfileCommand};
use crate::error::CliError;
use crate::output;

// ── Views ───────────────────────────────────────────────────────────

/// Serializable view of the signed-in principal.
#[derive(Serialize)]
struct PrincipalView {
    id: String,
    email: String,
    role: String,
    kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl PrincipalView {
    fn of(principal: &marinax_core::Principal) -> Self {
        Self {
            id: principal.id.clone(),
            email: principal.email.clone(),
            role: principal.role.to_string(),
            kind: principal.kind.to_string(),
            name: principal.name.clone(),
        }
    }

    fn detail(&self) -> String {
        let mut lines = vec![
            format!("Email: {}", self.email),
            format!("Role:  {}", self.role),
            format!("Kind:  {}", self.kind),
            format!("ID:    {}", self.id),
        ];
        if let Some(ref name) = self.name {
            lines.insert(0, format!("Name:  {name}"));
        }
        lines.join("\n")
    }
}

// ── Handlers ────────────────────────────────────────────────────────

pub async fn login(ctx: &Context, args: LoginArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let email = match args.email.or_else(|| ctx.default_email.clone()) {
        Some(email) => email,
        None => dialoguer::Input::new()
            .with_prompt("Email")
            .interact_text()
            .map_err(|e| CliError::Io(std::io::Error::other(e)))?,
    };
    validate::email("email", &email)?;

    let password = resolve_password(ctx)?;

    let principal = ctx.session.login(&email, password).await?;

    // Cache the token so later invocations restore silently.
    if let Some(token) = ctx.session.api().token_snapshot() {
        marinax_config::save_token(&ctx.profile_name, &token)?;
    }

    util::ack(
        &format!("Signed in as {} ({})", principal.email, principal.role),
        global,
    );
    Ok(())
}

/// Password chain: profile config (env var, keyring, plaintext), then an
/// interactive prompt.
fn resolve_password(ctx: &Context) -> Result<SecretString, CliError> {
    let cfg = marinax_config::load_config_or_default();
    if let Some(profile) = cfg.profiles.get(&ctx.profile_name) {
        if let Ok(secret) = marinax_config::resolve_password(profile, &ctx.profile_name) {
            return Ok(secret);
        }
    }

    let password = rpassword::prompt_password("Password: ")?;
    Ok(SecretString::from(password))
}

pub async fn logout(ctx: &Context, global: &GlobalOpts) -> Result<(), CliError> {
    // Drop the cache first -- the local token must not outlive the
    // session even when the server call fails.
    marinax_config::clear_token(&ctx.profile_name)?;
    let result = ctx.session.logout().await;

    util::ack("Signed out", global);
    result.map_err(CliError::from)
}

pub fn whoami(ctx: &Context, global: &GlobalOpts) -> Result<(), CliError> {
    let Some(principal) = ctx.session.principal() else {
        return Err(CliError::NotSignedIn {
            surface: ctx.session.kind().to_string(),
        });
    };

    let view = PrincipalView::of(&principal);
    let out = output::render_single(&global.output, &view, PrincipalView::detail, |v| {
        v.email.clone()
    });
    output::print_output(&out, global.quiet);
    Ok(())
}

pub async fn profile(ctx: &Context, args: ProfileArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ProfileCommand::Show => whoami(ctx, global),

        ProfileCommand::Update {
            name,
            email,
            password,
        } => {
            if let Some(ref email) = email {
                validate::email("email", email)?;
            }

            let new_password = if password {
                let entered = rpassword::prompt_password("New password: ")?;
                validate::password("password", &entered)?;
                Some(entered)
            } else {
                None
            };

            if name.is_none() && email.is_none() && new_password.is_none() {
                return Err(CliError::Validation {
                    field: "profile".into(),
                    reason: "nothing to update (pass --name, --email, or --password)".into(),
                });
            }

            let patch = ProfilePatch {
                name,
                email,
                password: new_password,
            };
            let principal = ctx.session.update_profile(&patch).await?;

            util::ack(&format!("Profile updated for {}", principal.email), global);
            Ok(())
        }
    }
}
