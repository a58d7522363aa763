//! Shared helpers for command handlers.

use std::sync::Arc;

use owo_colors::OwoColorize;
use tabled::Tabled;

use marinax_core::store::{FilterSet, FilterValue, ResourceStore};
use marinax_core::{Resource, Session};

use super::Context;
use crate::cli::{GlobalOpts, ListArgs, OutputFormat};
use crate::error::CliError;
use crate::output;

/// Parse repeated `key=value` flags into a filter set.
///
/// Keys are validated against the resource's known filter keys when the
/// store is built, so a typo fails before any request is made.
pub fn parse_filters(raw: &[String]) -> Result<FilterSet, CliError> {
    let mut filters = FilterSet::new();
    for item in raw {
        let Some((key, value)) = item.split_once('=') else {
            return Err(CliError::Validation {
                field: "filter".into(),
                reason: format!("expected key=value, got '{item}'"),
            });
        };
        // Everything goes over the wire as text; the server coerces.
        filters.insert(key.trim().to_owned(), FilterValue::from(value.trim()));
    }
    Ok(filters)
}

/// Build a store for the requested page and filters and fetch it.
pub async fn load_store<T: Resource>(
    ctx: &Context,
    list: &ListArgs,
) -> Result<ResourceStore<T>, CliError> {
    let store = ResourceStore::new(ctx.session.api().clone(), ctx.notifier.clone())
        .with_page_size(list.page_size)
        .with_page(list.page)
        .with_filters(parse_filters(&list.filter)?)?;
    store.refresh().await?;
    Ok(store)
}

/// Fetch, render, and print one page of a collection.
pub async fn run_list<T, R>(
    ctx: &Context,
    list: ListArgs,
    global: &GlobalOpts,
    to_row: impl Fn(&Arc<T>) -> R,
) -> Result<(), CliError>
where
    T: Resource,
    R: Tabled,
{
    let store = load_store::<T>(ctx, &list).await?;
    let state = store.state();

    let out = output::render_list(&global.output, &state.items, to_row, |item| {
        item.id().to_owned()
    });
    output::print_output(&out, global.quiet);

    // Pagination footer for interactive table output only.
    if matches!(global.output, OutputFormat::Table) && !global.quiet {
        let pages = state.total.div_ceil(u64::from(state.page_size)).max(1);
        let footer = format!("page {} of {pages} ({} total)", state.page, state.total);
        if output::should_color(&global.color) {
            eprintln!("{}", footer.dimmed());
        } else {
            eprintln!("{footer}");
        }
    }
    Ok(())
}

/// Fetch one record by id and print it.
pub async fn run_show<T: Resource>(
    session: &Session,
    global: &GlobalOpts,
    id: &str,
    detail_fn: impl Fn(&T) -> String,
) -> Result<(), CliError> {
    let record = session
        .api()
        .get_by_id::<T>(T::NAME, id)
        .await
        .map_err(marinax_core::CoreError::from)?;

    let out = output::render_single(&global.output, &record, detail_fn, |item| {
        item.id().to_owned()
    });
    output::print_output(&out, global.quiet);
    Ok(())
}

/// Prompt for confirmation, auto-approving if `--yes` was passed.
pub fn confirm(message: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    Ok(confirmed)
}

/// One-line acknowledgement on stderr, suppressed by --quiet.
pub fn ack(message: &str, global: &GlobalOpts) {
    if !global.quiet {
        eprintln!("{message}");
    }
}

/// Render an optional value for table cells.
pub fn cell<T: std::fmt::Display>(value: &Option<T>) -> String {
    value.as_ref().map(ToString::to_string).unwrap_or_default()
}
