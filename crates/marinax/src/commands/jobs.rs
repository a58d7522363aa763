//! Job command handlers, including the approval workflow.

use std::sync::Arc;

use tabled::Tabled;

use marinax_core::{validate, Job, JobDraft, JobPatch, ResourceStore};

use super::{util, Context};
use crate::cli::{GlobalOpts, JobsArgs, JobsCommand};
use crate::error::CliError;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct JobRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Budget")]
    budget: String,
}

impl From<&Arc<Job>> for JobRow {
    fn from(job: &Arc<Job>) -> Self {
        Self {
            id: job.id.clone(),
            title: job.title.clone(),
            category: job.category.clone(),
            status: job.status.to_string(),
            budget: job
                .budget
                .map(|b| format!("EUR {b:.0}"))
                .unwrap_or_default(),
        }
    }
}

fn detail(job: &Job) -> String {
    let mut lines = vec![
        format!("Title:    {}", job.title),
        format!("Category: {}", job.category),
        format!("Status:   {}", job.status),
        format!("ID:       {}", job.id),
    ];
    if let Some(ref description) = job.description {
        lines.push(format!("Description: {description}"));
    }
    if let Some(budget) = job.budget {
        lines.push(format!("Budget: EUR {budget:.2}"));
    }
    if let Some(ref location) = job.location {
        lines.push(format!("Location: {location}"));
    }
    lines.join("\n")
}

fn store(ctx: &Context) -> ResourceStore<Job> {
    ResourceStore::new(ctx.session.api().clone(), ctx.notifier.clone())
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(ctx: &Context, args: JobsArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        JobsCommand::List(list) => {
            util::run_list::<Job, _>(ctx, list, global, |item| JobRow::from(item)).await
        }

        JobsCommand::Show { id } => util::run_show::<Job>(&ctx.session, global, &id, detail).await,

        JobsCommand::Create {
            title,
            category,
            description,
            budget,
            location,
        } => {
            validate::require("title", &title)?;
            validate::require("category", &category)?;

            let draft = JobDraft {
                title,
                category,
                description,
                budget,
                location,
            };
            store(ctx).create(&draft).await?;

            util::ack("Job created", global);
            Ok(())
        }

        JobsCommand::Update {
            id,
            title,
            category,
            description,
            budget,
            location,
        } => {
            let patch = JobPatch {
                title,
                category,
                description,
                budget,
                location,
            };
            store(ctx).update(&id, &patch).await?;

            util::ack("Job updated", global);
            Ok(())
        }

        JobsCommand::Delete { id } => {
            if !util::confirm(&format!("Delete job '{id}'?"), global.yes)? {
                return Ok(());
            }
            store(ctx).delete(&id).await?;

            util::ack("Job deleted", global);
            Ok(())
        }

        JobsCommand::Approve { id } => {
            store(ctx).approve(&id).await?;
            util::ack("Job approved", global);
            Ok(())
        }

        JobsCommand::Reject { id, reason } => {
            validate::require("reason", &reason)?;
            store(ctx).reject(&id, &reason).await?;

            util::ack("Job rejected", global);
            Ok(())
        }
    }
}
