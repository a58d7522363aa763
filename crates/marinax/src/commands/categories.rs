//! Category command handlers.

use std::sync::Arc;

use tabled::Tabled;

use marinax_core::{validate, Category, CategoryDraft, CategoryPatch, ResourceStore};

use super::{util, Context};
use crate::cli::{CategoriesArgs, CategoriesCommand, GlobalOpts};
use crate::error::CliError;

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Slug")]
    slug: String,
    #[tabled(rename = "Active")]
    active: bool,
}

impl From<&Arc<Category>> for CategoryRow {
    fn from(category: &Arc<Category>) -> Self {
        Self {
            id: category.id.clone(),
            name: category.name.clone(),
            slug: category.slug.clone(),
            active: category.active,
        }
    }
}

fn detail(category: &Category) -> String {
    let mut lines = vec![
        format!("Name:   {}", category.name),
        format!("Slug:   {}", category.slug),
        format!("Active: {}", category.active),
        format!("ID:     {}", category.id),
    ];
    if let Some(ref description) = category.description {
        lines.push(format!("Description: {description}"));
    }
    lines.join("\n")
}

fn store(ctx: &Context) -> ResourceStore<Category> {
    ResourceStore::new(ctx.session.api().clone(), ctx.notifier.clone())
}

pub async fn handle(
    ctx: &Context,
    args: CategoriesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        CategoriesCommand::List(list) => {
            util::run_list::<Category, _>(ctx, list, global, |item| CategoryRow::from(item)).await
        }

        CategoriesCommand::Show { id } => {
            util::run_show::<Category>(&ctx.session, global, &id, detail).await
        }

        CategoriesCommand::Create {
            name,
            slug,
            description,
        } => {
            validate::require("name", &name)?;
            validate::require("slug", &slug)?;

            let draft = CategoryDraft {
                name,
                slug,
                description,
            };
            store(ctx).create(&draft).await?;

            util::ack("Category created", global);
            Ok(())
        }

        CategoriesCommand::Update {
            id,
            name,
            slug,
            description,
            active,
        } => {
            let patch = CategoryPatch {
                name,
                slug,
                description,
                active,
            };
            store(ctx).update(&id, &patch).await?;

            util::ack("Category updated", global);
            Ok(())
        }

        CategoriesCommand::Delete { id } => {
            if !util::confirm(&format!("Delete category '{id}'?"), global.yes)? {
                return Ok(());
            }
            store(ctx).delete(&id).await?;

            util::ack("Category deleted", global);
            Ok(())
        }
    }
}
