//! Command dispatch: session establishment, the access gate, and the
//! bridge from CLI args to core stores and output formatting.
//!
//! Every command group passes through [`dispatch`], which evaluates the
//! same role policy the panel's navigation uses before any handler runs.

pub mod admins;
pub mod blogs;
pub mod bookings;
pub mod categories;
pub mod config_cmd;
pub mod contracts;
pub mod dashboard;
pub mod jobs;
pub mod projects;
pub mod providers;
pub mod session_cmd;
pub mod settings;
pub mod util;
pub mod vessels;

use tracing::{debug, warn};

use marinax_core::{
    AccessDecision, AccessGate, Feature, Notifier, PrincipalKind, Session,
};

use crate::cli::{Command, GlobalOpts, KindArg};
use crate::config;
use crate::error::CliError;

impl KindArg {
    pub fn into_kind(self) -> PrincipalKind {
        match self {
            Self::Staff => PrincipalKind::Staff,
            Self::Provider => PrincipalKind::Provider,
        }
    }
}

// ── Context ──────────────────────────────────────────────────────────

/// Shared per-invocation state handed to every command handler.
pub struct Context {
    pub session: Session,
    pub notifier: Notifier,
    pub profile_name: String,
    /// Login email from the profile, used as the prompt default.
    pub default_email: Option<String>,
}

impl Context {
    /// Open the API connection and silently restore a cached session.
    pub async fn establish(global: &GlobalOpts, cmd: &Command) -> Result<Self, CliError> {
        let kind_override = match cmd {
            Command::Login(args) => Some(args.kind.into_kind()),
            _ => None,
        };

        let connection = config::connect(global, kind_override)?;
        let session = Session::new(connection.api, connection.kind);
        let notifier = Notifier::new();

        // Silent restore from the token cache -- except for `login`,
        // which replaces the session outright.
        if !matches!(cmd, Command::Login(_)) {
            if let Some(token) = marinax_config::load_token(&connection.profile_name) {
                match session.restore(token).await {
                    Ok(principal) => debug!(email = %principal.email, "session restored"),
                    Err(err) if err.is_auth() => {
                        // Cached token went stale; drop it and stay signed out.
                        let _ = marinax_config::clear_token(&connection.profile_name);
                    }
                    Err(err) => warn!(error = %err, "session restore failed"),
                }
            }
        }

        Ok(Self {
            session,
            notifier,
            profile_name: connection.profile_name,
            default_email: connection.email,
        })
    }
}

// ── Access gate ──────────────────────────────────────────────────────

/// Feature behind each gated command group.
fn feature_for(cmd: &Command) -> Option<Feature> {
    match cmd {
        Command::Dashboard => Some(Feature::Dashboard),
        Command::Admins(_) => Some(Feature::Admins),
        Command::Providers(_) => Some(Feature::Providers),
        Command::Jobs(_) => Some(Feature::Jobs),
        Command::Categories(_) => Some(Feature::Categories),
        Command::Blogs(_) => Some(Feature::Blogs),
        Command::Bookings(_) => Some(Feature::Bookings),
        Command::Contracts(_) => Some(Feature::Contracts),
        Command::Vessels(_) => Some(Feature::Vessels),
        Command::Projects(_) => Some(Feature::Projects),
        Command::Settings(_) => Some(Feature::Settings),
        _ => None,
    }
}

/// Gate for commands any authenticated principal may run on its own
/// surface (whoami, profile).
fn session_gate(ctx: &Context) -> AccessGate {
    match ctx.session.kind() {
        PrincipalKind::Staff => AccessGate::staff(),
        PrincipalKind::Provider => AccessGate::provider(),
    }
}

fn enforce(gate: &AccessGate, ctx: &Context) -> Result<(), CliError> {
    let principal = ctx.session.principal();
    match gate.evaluate(principal.as_deref()) {
        AccessDecision::Authorized => Ok(()),
        AccessDecision::Unauthenticated { surface } => Err(CliError::NotSignedIn {
            surface: surface.to_string(),
        }),
        AccessDecision::Forbidden { required } => Err(CliError::AccessDenied {
            required: required
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" or "),
        }),
    }
}

// ── Dispatch ─────────────────────────────────────────────────────────

/// Dispatch a session-bound command to the appropriate handler.
pub async fn dispatch(cmd: Command, ctx: &Context, global: &GlobalOpts) -> Result<(), CliError> {
    let gate = match &cmd {
        Command::Login(_) | Command::Logout => None,
        Command::Whoami | Command::Profile(_) => Some(session_gate(ctx)),
        other => feature_for(other).map(AccessGate::for_feature),
    };
    if let Some(gate) = gate {
        enforce(&gate, ctx)?;
    }

    match cmd {
        Command::Login(args) => session_cmd::login(ctx, args, global).await,
        Command::Logout => session_cmd::logout(ctx, global).await,
        Command::Whoami => session_cmd::whoami(ctx, global),
        Command::Profile(args) => session_cmd::profile(ctx, args, global).await,
        Command::Dashboard => dashboard::handle(ctx, global).await,
        Command::Admins(args) => admins::handle(ctx, args, global).await,
        Command::Providers(args) => providers::handle(ctx, args, global).await,
        Command::Jobs(args) => jobs::handle(ctx, args, global).await,
        Command::Categories(args) => categories::handle(ctx, args, global).await,
        Command::Blogs(args) => blogs::handle(ctx, args, global).await,
        Command::Bookings(args) => bookings::handle(ctx, args, global).await,
        Command::Contracts(args) => contracts::handle(ctx, args, global).await,
        Command::Vessels(args) => vessels::handle(ctx, args, global).await,
        Command::Projects(args) => projects::handle(ctx, args, global).await,
        Command::Settings(args) => settings::handle(ctx, args, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
