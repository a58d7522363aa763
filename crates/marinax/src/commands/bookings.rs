//! Booking command handlers.
//!
//! Bookings are created customer-side; the panel reads, reschedules, and
//! cancels them.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tabled::Tabled;

use marinax_core::{Booking, BookingPatch, ResourceStore};

use super::{util, Context};
use crate::cli::{BookingsArgs, BookingsCommand, GlobalOpts};
use crate::error::CliError;

#[derive(Tabled)]
struct BookingRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Reference")]
    reference: String,
    #[tabled(rename = "Customer")]
    customer: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Scheduled")]
    scheduled: String,
}

impl From<&Arc<Booking>> for BookingRow {
    fn from(booking: &Arc<Booking>) -> Self {
        Self {
            id: booking.id.clone(),
            reference: booking.reference.clone(),
            customer: booking.customer_email.clone(),
            status: booking.status.clone(),
            scheduled: util::cell(&booking.scheduled_for),
        }
    }
}

fn detail(booking: &Booking) -> String {
    let mut lines = vec![
        format!("Reference: {}", booking.reference),
        format!("Customer:  {}", booking.customer_email),
        format!("Status:    {}", booking.status),
        format!("Provider:  {}", booking.provider_id),
        format!("ID:        {}", booking.id),
    ];
    if let Some(scheduled) = booking.scheduled_for {
        lines.push(format!("Scheduled: {scheduled}"));
    }
    if let Some(ref vessel) = booking.vessel_id {
        lines.push(format!("Vessel: {vessel}"));
    }
    lines.join("\n")
}

fn parse_schedule(raw: &str) -> Result<DateTime<Utc>, CliError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| CliError::Validation {
            field: "scheduled-for".into(),
            reason: format!("expected RFC 3339 timestamp: {e}"),
        })
}

fn store(ctx: &Context) -> ResourceStore<Booking> {
    ResourceStore::new(ctx.session.api().clone(), ctx.notifier.clone())
}

pub async fn handle(
    ctx: &Context,
    args: BookingsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        BookingsCommand::List(list) => {
            util::run_list::<Booking, _>(ctx, list, global, |item| BookingRow::from(item)).await
        }

        BookingsCommand::Show { id } => {
            util::run_show::<Booking>(&ctx.session, global, &id, detail).await
        }

        BookingsCommand::Update {
            id,
            status,
            scheduled_for,
        } => {
            let scheduled_for = scheduled_for.as_deref().map(parse_schedule).transpose()?;

            if status.is_none() && scheduled_for.is_none() {
                return Err(CliError::Validation {
                    field: "booking".into(),
                    reason: "nothing to update (pass --status or --scheduled-for)".into(),
                });
            }

            let patch = BookingPatch {
                status,
                scheduled_for,
            };
            store(ctx).update(&id, &patch).await?;

            util::ack("Booking updated", global);
            Ok(())
        }

        BookingsCommand::Delete { id } => {
            if !util::confirm(&format!("Delete booking '{id}'?"), global.yes)? {
                return Ok(());
            }
            store(ctx).delete(&id).await?;

            util::ack("Booking deleted", global);
            Ok(())
        }
    }
}
