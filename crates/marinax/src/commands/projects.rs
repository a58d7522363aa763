//! Project command handlers.

use std::sync::Arc;

use chrono::NaiveDate;
use tabled::Tabled;

use marinax_core::{validate, Project, ProjectDraft, ProjectPatch, ResourceStore};

use super::{util, Context};
use crate::cli::{GlobalOpts, ProjectsArgs, ProjectsCommand};
use crate::error::CliError;

#[derive(Tabled)]
struct ProjectRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Vessel")]
    vessel: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Started")]
    started: String,
}

impl From<&Arc<Project>> for ProjectRow {
    fn from(project: &Arc<Project>) -> Self {
        Self {
            id: project.id.clone(),
            name: project.name.clone(),
            vessel: project.vessel_id.clone(),
            status: project.status.clone(),
            started: util::cell(&project.started_on),
        }
    }
}

fn detail(project: &Project) -> String {
    let mut lines = vec![
        format!("Name:   {}", project.name),
        format!("Vessel: {}", project.vessel_id),
        format!("Status: {}", project.status),
        format!("ID:     {}", project.id),
    ];
    if let Some(ref description) = project.description {
        lines.push(format!("Description: {description}"));
    }
    if let Some(started) = project.started_on {
        lines.push(format!("Started: {started}"));
    }
    if let Some(completed) = project.completed_on {
        lines.push(format!("Completed: {completed}"));
    }
    lines.join("\n")
}

fn parse_date(field: &str, raw: &str) -> Result<NaiveDate, CliError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|e| CliError::Validation {
        field: field.into(),
        reason: format!("expected YYYY-MM-DD: {e}"),
    })
}

fn store(ctx: &Context) -> ResourceStore<Project> {
    ResourceStore::new(ctx.session.api().clone(), ctx.notifier.clone())
}

pub async fn handle(
    ctx: &Context,
    args: ProjectsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        ProjectsCommand::List(list) => {
            util::run_list::<Project, _>(ctx, list, global, |item| ProjectRow::from(item)).await
        }

        ProjectsCommand::Show { id } => {
            util::run_show::<Project>(&ctx.session, global, &id, detail).await
        }

        ProjectsCommand::Create {
            name,
            vessel_id,
            description,
            started_on,
        } => {
            validate::require("name", &name)?;
            validate::require("vessel-id", &vessel_id)?;
            let started_on = started_on
                .as_deref()
                .map(|raw| parse_date("started-on", raw))
                .transpose()?;

            let draft = ProjectDraft {
                name,
                vessel_id,
                description,
                started_on,
            };
            store(ctx).create(&draft).await?;

            util::ack("Project created", global);
            Ok(())
        }

        ProjectsCommand::Update {
            id,
            name,
            description,
            status,
            completed_on,
        } => {
            let completed_on = completed_on
                .as_deref()
                .map(|raw| parse_date("completed-on", raw))
                .transpose()?;

            let patch = ProjectPatch {
                name,
                description,
                status,
                completed_on,
            };
            store(ctx).update(&id, &patch).await?;

            util::ack("Project updated", global);
            Ok(())
        }

        ProjectsCommand::Delete { id } => {
            if !util::confirm(&format!("Delete project '{id}'?"), global.yes)? {
                return Ok(());
            }
            store(ctx).delete(&id).await?;

            util::ack("Project deleted", global);
            Ok(())
        }
    }
}
