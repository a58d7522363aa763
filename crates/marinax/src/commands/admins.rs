//! Staff account command handlers.
//!
//! Deletes route through [`AdminDirectory`] so the self-delete guard
//! runs before the transport is touched.

use std::sync::Arc;

use tabled::Tabled;

use marinax_core::{
    validate, Admin, AdminDirectory, AdminDraft, AdminPatch, ResourceStore, Role,
};

use super::{util, Context};
use crate::cli::{AdminsArgs, AdminsCommand, GlobalOpts, RoleArg};
use crate::error::CliError;

fn role_from_arg(arg: RoleArg) -> Role {
    match arg {
        RoleArg::Admin => Role::Admin,
        RoleArg::Superadmin => Role::Superadmin,
    }
}

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct AdminRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Role")]
    role: String,
    #[tabled(rename = "Last login")]
    last_login: String,
}

impl From<&Arc<Admin>> for AdminRow {
    fn from(admin: &Arc<Admin>) -> Self {
        Self {
            id: admin.id.clone(),
            name: admin.name.clone(),
            email: admin.email.clone(),
            role: admin.role.to_string(),
            last_login: util::cell(&admin.last_login),
        }
    }
}

fn detail(admin: &Admin) -> String {
    [
        format!("Name:  {}", admin.name),
        format!("Email: {}", admin.email),
        format!("Role:  {}", admin.role),
        format!("ID:    {}", admin.id),
    ]
    .join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(ctx: &Context, args: AdminsArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        AdminsCommand::List(list) => {
            util::run_list::<Admin, _>(ctx, list, global, |item| AdminRow::from(item)).await
        }

        AdminsCommand::Show { id } => {
            util::run_show::<Admin>(&ctx.session, global, &id, detail).await
        }

        AdminsCommand::Create { name, email, role } => {
            validate::require("name", &name)?;
            validate::email("email", &email)?;

            let password = rpassword::prompt_password("Initial password: ")?;
            validate::password("password", &password)?;

            let draft = AdminDraft {
                name,
                email,
                role: role_from_arg(role),
                password,
            };
            let store: ResourceStore<Admin> =
                ResourceStore::new(ctx.session.api().clone(), ctx.notifier.clone());
            store.create(&draft).await?;

            util::ack("Admin created", global);
            Ok(())
        }

        AdminsCommand::Update {
            id,
            name,
            email,
            role,
        } => {
            if let Some(ref email) = email {
                validate::email("email", email)?;
            }

            let patch = AdminPatch {
                name,
                email,
                role: role.map(role_from_arg),
            };
            let store: ResourceStore<Admin> =
                ResourceStore::new(ctx.session.api().clone(), ctx.notifier.clone());
            store.update(&id, &patch).await?;

            util::ack("Admin updated", global);
            Ok(())
        }

        AdminsCommand::Delete { id } => {
            if !util::confirm(&format!("Delete admin '{id}'?"), global.yes)? {
                return Ok(());
            }

            let directory = AdminDirectory::new(ctx.session.clone(), ctx.notifier.clone());
            // Load the current page so the guard can match the target row
            // by email, not just by id.
            directory.store().refresh().await?;
            directory.delete(&id).await?;

            util::ack("Admin deleted", global);
            Ok(())
        }
    }
}
