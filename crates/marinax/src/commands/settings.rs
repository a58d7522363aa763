//! Site settings command handlers.

use marinax_core::site;
use marinax_core::{validate, SiteSettings, SiteSettingsPatch};

use super::{util, Context};
use crate::cli::{GlobalOpts, SettingsArgs, SettingsCommand};
use crate::error::CliError;
use crate::output;

fn detail(settings: &SiteSettings) -> String {
    let mut lines = vec![
        format!("Site name:        {}", settings.site_name),
        format!("Support email:    {}", settings.support_email),
        format!("Maintenance mode: {}", settings.maintenance_mode),
        format!("Auto-approval:    {}", settings.provider_auto_approval),
    ];
    if let Some(hours) = settings.booking_lead_time_hours {
        lines.push(format!("Booking lead time: {hours}h"));
    }
    lines.join("\n")
}

fn print_settings(settings: &SiteSettings, global: &GlobalOpts) {
    let out = output::render_single(&global.output, settings, detail, |s| s.site_name.clone());
    output::print_output(&out, global.quiet);
}

pub async fn handle(ctx: &Context, args: SettingsArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        SettingsCommand::Show => {
            let settings = site::site_settings(ctx.session.api()).await?;
            print_settings(&settings, global);
            Ok(())
        }

        SettingsCommand::Set {
            site_name,
            support_email,
            maintenance_mode,
            provider_auto_approval,
            booking_lead_time_hours,
        } => {
            if let Some(ref email) = support_email {
                validate::email("support-email", email)?;
            }

            let patch = SiteSettingsPatch {
                site_name,
                support_email,
                maintenance_mode,
                provider_auto_approval,
                booking_lead_time_hours,
            };

            if serde_json::to_value(&patch)
                .map(|v| v.as_object().is_some_and(serde_json::Map::is_empty))
                .unwrap_or(true)
            {
                return Err(CliError::Validation {
                    field: "settings".into(),
                    reason: "nothing to update (pass at least one --flag)".into(),
                });
            }

            let settings = site::update_site_settings(ctx.session.api(), &patch).await?;

            util::ack("Settings updated", global);
            print_settings(&settings, global);
            Ok(())
        }
    }
}
