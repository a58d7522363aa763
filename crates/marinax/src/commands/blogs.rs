//! Blog post command handlers.

use std::sync::Arc;

use tabled::Tabled;

use marinax_core::{validate, Blog, BlogDraft, BlogPatch, ResourceStore};

use super::{util, Context};
use crate::cli::{BlogsArgs, BlogsCommand, GlobalOpts};
use crate::error::CliError;

#[derive(Tabled)]
struct BlogRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Author")]
    author: String,
    #[tabled(rename = "Published")]
    published: String,
}

impl From<&Arc<Blog>> for BlogRow {
    fn from(blog: &Arc<Blog>) -> Self {
        Self {
            id: blog.id.clone(),
            title: blog.title.clone(),
            author: util::cell(&blog.author),
            published: if blog.published {
                util::cell(&blog.published_at)
            } else {
                "draft".into()
            },
        }
    }
}

fn detail(blog: &Blog) -> String {
    let mut lines = vec![
        format!("Title:     {}", blog.title),
        format!("Slug:      {}", blog.slug),
        format!("Published: {}", blog.published),
        format!("ID:        {}", blog.id),
    ];
    if let Some(ref author) = blog.author {
        lines.push(format!("Author: {author}"));
    }
    if let Some(ref excerpt) = blog.excerpt {
        lines.push(format!("Excerpt: {excerpt}"));
    }
    lines.join("\n")
}

fn store(ctx: &Context) -> ResourceStore<Blog> {
    ResourceStore::new(ctx.session.api().clone(), ctx.notifier.clone())
}

pub async fn handle(ctx: &Context, args: BlogsArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        BlogsCommand::List(list) => {
            util::run_list::<Blog, _>(ctx, list, global, |item| BlogRow::from(item)).await
        }

        BlogsCommand::Show { id } => {
            util::run_show::<Blog>(&ctx.session, global, &id, detail).await
        }

        BlogsCommand::Create {
            title,
            slug,
            excerpt,
            author,
        } => {
            validate::require("title", &title)?;
            validate::require("slug", &slug)?;

            let draft = BlogDraft {
                title,
                slug,
                excerpt,
                body: None,
                author,
            };
            store(ctx).create(&draft).await?;

            util::ack("Blog post created as draft", global);
            Ok(())
        }

        BlogsCommand::Update {
            id,
            title,
            slug,
            excerpt,
            published,
        } => {
            let patch = BlogPatch {
                title,
                slug,
                excerpt,
                body: None,
                published,
            };
            store(ctx).update(&id, &patch).await?;

            util::ack("Blog post updated", global);
            Ok(())
        }

        BlogsCommand::Delete { id } => {
            if !util::confirm(&format!("Delete blog post '{id}'?"), global.yes)? {
                return Ok(());
            }
            store(ctx).delete(&id).await?;

            util::ack("Blog post deleted", global);
            Ok(())
        }
    }
}
