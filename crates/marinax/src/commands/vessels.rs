//! Vessel command handlers.

use std::sync::Arc;

use tabled::Tabled;

use marinax_core::{validate, ResourceStore, Vessel, VesselDraft, VesselPatch};

use super::{util, Context};
use crate::cli::{GlobalOpts, VesselsArgs, VesselsCommand};
use crate::error::CliError;

#[derive(Tabled)]
struct VesselRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Registration")]
    registration: String,
    #[tabled(rename = "Home port")]
    home_port: String,
}

impl From<&Arc<Vessel>> for VesselRow {
    fn from(vessel: &Arc<Vessel>) -> Self {
        Self {
            id: vessel.id.clone(),
            name: vessel.name.clone(),
            kind: vessel.kind.clone(),
            registration: util::cell(&vessel.registration),
            home_port: util::cell(&vessel.home_port),
        }
    }
}

fn detail(vessel: &Vessel) -> String {
    let mut lines = vec![
        format!("Name: {}", vessel.name),
        format!("Type: {}", vessel.kind),
        format!("ID:   {}", vessel.id),
    ];
    if let Some(ref registration) = vessel.registration {
        lines.push(format!("Registration: {registration}"));
    }
    if let Some(length) = vessel.length_m {
        lines.push(format!("Length: {length:.1} m"));
    }
    if let Some(ref port) = vessel.home_port {
        lines.push(format!("Home port: {port}"));
    }
    if let Some(ref owner) = vessel.owner_email {
        lines.push(format!("Owner: {owner}"));
    }
    lines.join("\n")
}

fn store(ctx: &Context) -> ResourceStore<Vessel> {
    ResourceStore::new(ctx.session.api().clone(), ctx.notifier.clone())
}

pub async fn handle(ctx: &Context, args: VesselsArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        VesselsCommand::List(list) => {
            util::run_list::<Vessel, _>(ctx, list, global, |item| VesselRow::from(item)).await
        }

        VesselsCommand::Show { id } => {
            util::run_show::<Vessel>(&ctx.session, global, &id, detail).await
        }

        VesselsCommand::Create {
            name,
            vessel_type,
            registration,
            length_m,
            owner_email,
            home_port,
        } => {
            validate::require("name", &name)?;
            validate::require("type", &vessel_type)?;
            if let Some(ref email) = owner_email {
                validate::email("owner-email", email)?;
            }

            let draft = VesselDraft {
                name,
                kind: vessel_type,
                registration,
                length_m,
                owner_email,
                home_port,
            };
            store(ctx).create(&draft).await?;

            util::ack("Vessel created", global);
            Ok(())
        }

        VesselsCommand::Update {
            id,
            name,
            vessel_type,
            registration,
            length_m,
            home_port,
        } => {
            let patch = VesselPatch {
                name,
                kind: vessel_type,
                registration,
                length_m,
                home_port,
            };
            store(ctx).update(&id, &patch).await?;

            util::ack("Vessel updated", global);
            Ok(())
        }

        VesselsCommand::Delete { id } => {
            if !util::confirm(&format!("Delete vessel '{id}'?"), global.yes)? {
                return Ok(());
            }
            store(ctx).delete(&id).await?;

            util::ack("Vessel deleted", global);
            Ok(())
        }
    }
}
