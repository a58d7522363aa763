//! Contract command handlers.

use std::sync::Arc;

use tabled::Tabled;

use marinax_core::{validate, Contract, ContractDraft, ContractPatch, ResourceStore};

use super::{util, Context};
use crate::cli::{ContractsArgs, ContractsCommand, GlobalOpts};
use crate::error::CliError;

#[derive(Tabled)]
struct ContractRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Provider")]
    provider: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Value")]
    value: String,
}

impl From<&Arc<Contract>> for ContractRow {
    fn from(contract: &Arc<Contract>) -> Self {
        Self {
            id: contract.id.clone(),
            title: contract.title.clone(),
            provider: contract.provider_id.clone(),
            status: contract.status.clone(),
            value: contract
                .value
                .map(|v| format!("EUR {v:.0}"))
                .unwrap_or_default(),
        }
    }
}

fn detail(contract: &Contract) -> String {
    let mut lines = vec![
        format!("Title:    {}", contract.title),
        format!("Provider: {}", contract.provider_id),
        format!("Status:   {}", contract.status),
        format!("ID:       {}", contract.id),
    ];
    if let Some(value) = contract.value {
        lines.push(format!("Value: EUR {value:.2}"));
    }
    if let Some(signed) = contract.signed_at {
        lines.push(format!("Signed: {signed}"));
    }
    if let Some(expires) = contract.expires_at {
        lines.push(format!("Expires: {expires}"));
    }
    lines.join("\n")
}

fn store(ctx: &Context) -> ResourceStore<Contract> {
    ResourceStore::new(ctx.session.api().clone(), ctx.notifier.clone())
}

pub async fn handle(
    ctx: &Context,
    args: ContractsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        ContractsCommand::List(list) => {
            util::run_list::<Contract, _>(ctx, list, global, |item| ContractRow::from(item)).await
        }

        ContractsCommand::Show { id } => {
            util::run_show::<Contract>(&ctx.session, global, &id, detail).await
        }

        ContractsCommand::Create {
            title,
            provider_id,
            booking_id,
            value,
        } => {
            validate::require("title", &title)?;
            validate::require("provider-id", &provider_id)?;

            let draft = ContractDraft {
                title,
                provider_id,
                booking_id,
                value,
            };
            store(ctx).create(&draft).await?;

            util::ack("Contract created", global);
            Ok(())
        }

        ContractsCommand::Update {
            id,
            title,
            status,
            value,
        } => {
            let patch = ContractPatch {
                title,
                status,
                value,
                expires_at: None,
            };
            store(ctx).update(&id, &patch).await?;

            util::ack("Contract updated", global);
            Ok(())
        }

        ContractsCommand::Delete { id } => {
            if !util::confirm(&format!("Delete contract '{id}'?"), global.yes)? {
                return Ok(());
            }
            store(ctx).delete(&id).await?;

            util::ack("Contract deleted", global);
            Ok(())
        }
    }
}
