//! Provider command handlers, including the approval workflow.

use std::sync::Arc;

use tabled::Tabled;

use marinax_core::{validate, Provider, ProviderDraft, ProviderPatch, ResourceStore};

use super::{util, Context};
use crate::cli::{GlobalOpts, ProvidersArgs, ProvidersCommand};
use crate::error::CliError;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct ProviderRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Location")]
    location: String,
}

impl From<&Arc<Provider>> for ProviderRow {
    fn from(provider: &Arc<Provider>) -> Self {
        Self {
            id: provider.id.clone(),
            name: provider.name.clone(),
            email: provider.email.clone(),
            status: provider.status.to_string(),
            location: util::cell(&provider.location),
        }
    }
}

fn detail(provider: &Provider) -> String {
    let mut lines = vec![
        format!("Name:   {}", provider.name),
        format!("Email:  {}", provider.email),
        format!("Status: {}", provider.status),
        format!("ID:     {}", provider.id),
    ];
    if !provider.categories.is_empty() {
        lines.push(format!("Categories: {}", provider.categories.join(", ")));
    }
    if let Some(ref location) = provider.location {
        lines.push(format!("Location: {location}"));
    }
    if let Some(rating) = provider.rating {
        lines.push(format!("Rating: {rating:.1}"));
    }
    lines.join("\n")
}

fn store(ctx: &Context) -> ResourceStore<Provider> {
    ResourceStore::new(ctx.session.api().clone(), ctx.notifier.clone())
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    ctx: &Context,
    args: ProvidersArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        ProvidersCommand::List(list) => {
            util::run_list::<Provider, _>(ctx, list, global, |item| ProviderRow::from(item)).await
        }

        ProvidersCommand::Show { id } => {
            util::run_show::<Provider>(&ctx.session, global, &id, detail).await
        }

        ProvidersCommand::Create {
            name,
            email,
            phone,
            categories,
            location,
        } => {
            validate::require("name", &name)?;
            validate::email("email", &email)?;

            let draft = ProviderDraft {
                name,
                email,
                phone,
                categories,
                location,
            };
            store(ctx).create(&draft).await?;

            util::ack("Provider created", global);
            Ok(())
        }

        ProvidersCommand::Update {
            id,
            name,
            email,
            phone,
            categories,
            location,
        } => {
            if let Some(ref email) = email {
                validate::email("email", email)?;
            }

            let patch = ProviderPatch {
                name,
                email,
                phone,
                categories,
                location,
            };
            store(ctx).update(&id, &patch).await?;

            util::ack("Provider updated", global);
            Ok(())
        }

        ProvidersCommand::Delete { id } => {
            if !util::confirm(&format!("Delete provider '{id}'?"), global.yes)? {
                return Ok(());
            }
            store(ctx).delete(&id).await?;

            util::ack("Provider deleted", global);
            Ok(())
        }

        ProvidersCommand::Approve { id } => {
            store(ctx).approve(&id).await?;
            util::ack("Provider approved", global);
            Ok(())
        }

        ProvidersCommand::Reject { id, reason } => {
            validate::require("reason", &reason)?;
            store(ctx).reject(&id, &reason).await?;

            util::ack("Provider rejected", global);
            Ok(())
        }
    }
}
