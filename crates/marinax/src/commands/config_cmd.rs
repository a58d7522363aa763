//! Config command handlers. These never touch the network.

use secrecy::SecretString;

use marinax_config::{self as config_file, Config, Profile};
use marinax_core::PrincipalKind;

use super::util;
use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::error::CliError;

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Init => init(global),
        ConfigCommand::Show => show(global),
        ConfigCommand::Profiles => {
            profiles(global);
            Ok(())
        }
        ConfigCommand::Use { name } => use_profile(&name, global),
        ConfigCommand::SetPassword { profile } => set_password(profile, global),
    }
}

/// Guided setup for a first profile.
fn init(global: &GlobalOpts) -> Result<(), CliError> {
    let mut cfg = config_file::load_config_or_default();
    let profile_name = global.profile.clone().unwrap_or_else(|| "default".into());

    let api_url: String = dialoguer::Input::new()
        .with_prompt("API base URL")
        .default("https://api.marine-axis.io".into())
        .interact_text()
        .map_err(io_err)?;

    let kinds = ["staff", "provider"];
    let kind_idx = dialoguer::Select::new()
        .with_prompt("Login surface")
        .items(&kinds)
        .default(0)
        .interact()
        .map_err(io_err)?;
    let kind = if kind_idx == 1 {
        PrincipalKind::Provider
    } else {
        PrincipalKind::Staff
    };

    let email: String = dialoguer::Input::new()
        .with_prompt("Login email (blank to skip)")
        .allow_empty(true)
        .interact_text()
        .map_err(io_err)?;

    cfg.profiles.insert(
        profile_name.clone(),
        Profile {
            api_url,
            kind,
            email: (!email.is_empty()).then_some(email),
            password: None,
            password_env: None,
            ca_cert: None,
            insecure: None,
            timeout: None,
        },
    );
    if cfg.default_profile.is_none() {
        cfg.default_profile = Some(profile_name.clone());
    }

    config_file::save_config(&cfg)?;
    util::ack(
        &format!(
            "Profile '{profile_name}' written to {}",
            config_file::config_path().display()
        ),
        global,
    );
    util::ack(
        "Store a password with: marinax config set-password",
        global,
    );
    Ok(())
}

/// Display the resolved configuration as TOML.
fn show(global: &GlobalOpts) -> Result<(), CliError> {
    let cfg = config_file::load_config_or_default();
    let rendered = toml::to_string_pretty(&cfg)
        .map_err(|e| CliError::Config(format!("failed to render config: {e}")))?;

    if !global.quiet {
        println!("{rendered}");
    }
    Ok(())
}

fn profiles(global: &GlobalOpts) {
    let cfg = config_file::load_config_or_default();
    let default = cfg.default_profile.as_deref().unwrap_or("");

    let mut names: Vec<&String> = cfg.profiles.keys().collect();
    names.sort_unstable();

    if names.is_empty() {
        util::ack("No profiles configured. Run: marinax config init", global);
        return;
    }

    for name in names {
        let marker = if name == default { " (default)" } else { "" };
        if !global.quiet {
            println!("{name}{marker}");
        }
    }
}

fn use_profile(name: &str, global: &GlobalOpts) -> Result<(), CliError> {
    let mut cfg = config_file::load_config_or_default();

    if !cfg.profiles.contains_key(name) {
        let mut available: Vec<&str> = cfg.profiles.keys().map(String::as_str).collect();
        available.sort_unstable();
        return Err(CliError::ProfileNotFound {
            name: name.to_owned(),
            available: available.join(", "),
        });
    }

    cfg.default_profile = Some(name.to_owned());
    config_file::save_config(&cfg)?;
    util::ack(&format!("Default profile set to '{name}'"), global);
    Ok(())
}

fn set_password(profile: Option<String>, global: &GlobalOpts) -> Result<(), CliError> {
    let cfg = config_file::load_config_or_default();
    let profile_name = profile
        .or_else(|| global.profile.clone())
        .or(cfg.default_profile)
        .unwrap_or_else(|| "default".into());

    let password = rpassword::prompt_password("Password: ")?;
    config_file::store_password(&profile_name, &SecretString::from(password))?;

    util::ack(
        &format!("Password stored in the system keyring for '{profile_name}'"),
        global,
    );
    Ok(())
}

fn io_err(e: dialoguer::Error) -> CliError {
    CliError::Io(std::io::Error::other(e))
}
