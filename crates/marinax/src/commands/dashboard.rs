//! Dashboard command handler.

use marinax_core::site;
use marinax_core::DashboardSummary;

use super::Context;
use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

fn detail(summary: &DashboardSummary) -> String {
    let mut lines = vec![
        format!(
            "Providers: {} ({} pending)",
            summary.total_providers, summary.pending_providers
        ),
        format!(
            "Jobs:      {} ({} pending)",
            summary.total_jobs, summary.pending_jobs
        ),
        format!("Bookings:  {}", summary.total_bookings),
        format!("Contracts: {} active", summary.active_contracts),
        format!("Vessels:   {}", summary.total_vessels),
    ];
    if let Some(revenue) = summary.revenue_this_month {
        lines.push(format!("Revenue this month: EUR {revenue:.2}"));
    }
    lines.join("\n")
}

pub async fn handle(ctx: &Context, global: &GlobalOpts) -> Result<(), CliError> {
    let summary = site::dashboard_summary(ctx.session.api()).await?;

    let out = output::render_single(&global.output, &summary, detail, |s| {
        s.total_providers.to_string()
    });
    output::print_output(&out, global.quiet);
    Ok(())
}
