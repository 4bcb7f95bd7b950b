//! Ticketing sink seam.
//!
//! Ticket systems (Jira, OpsGenie, ...) are external collaborators with a
//! narrow contract: create one ticket per merged alert, then append one
//! comment per enrichment result. The wire clients live outside this crate
//! and plug in through [`TicketSink`].

use tracing::{debug, info};

use crate::alert::Alert;
use crate::error::Result;

/// The operations a ticket system exposes to the pipeline.
pub trait TicketSink {
    /// Create a ticket for a merged alert, returning the ticket id.
    fn create_ticket(&mut self, alert: &Alert) -> Result<String>;

    /// Append a comment to an existing ticket. Idempotent to call once per
    /// result.
    fn append_comment(&mut self, ticket_id: &str, body: &str) -> Result<()>;
}

/// Deliver one merged alert to a ticket sink.
///
/// Only the output of successful enrichments is posted; a failed provider
/// call is logged and skipped so one flaky provider cannot clutter every
/// ticket with error comments.
pub fn deliver(sink: &mut dyn TicketSink, alert: &Alert) -> Result<String> {
    let ticket_id = sink.create_ticket(alert)?;
    info!(alert = %alert.id, ticket = %ticket_id, "created ticket");

    for result in &alert.results {
        if !result.success {
            debug!(
                alert = %alert.id,
                source = %result.source,
                "skipping failed enrichment result"
            );
            continue;
        }
        sink.append_comment(&ticket_id, &result.prettify())?;
    }
    Ok(ticket_id)
}
