//! Inbound message processing: normalize, extract, hand off.

use tracing::{info, warn};

use crate::alert::Alert;
use crate::error::Result;
use crate::extract::SubjectExtractor;
use crate::normalize::RawAlert;

/// Process one inbound webhook message into an enrichment-ready alert.
///
/// Detects the source shape, converts to the canonical form and populates
/// subjects and scope. Fails with `UnrecognizedFormat` for unknown payloads
/// and `NoSubjectsFound` when there is nothing to enrich.
pub fn process_message(raw: &str, extractor: &SubjectExtractor) -> Result<Alert> {
    let mut alert = RawAlert::detect(raw)?.normalize();
    extractor.populate(&mut alert)?;
    info!(
        alert = %alert.id,
        subjects = alert.subjects.len(),
        scope = %alert.scope,
        "processed alert"
    );
    Ok(alert)
}

/// Process a batch of inbound messages independently.
///
/// A message that fails is logged and reported in its slot; it never aborts
/// the rest of the batch, and no state is shared between messages.
pub fn process_batch<I, S>(messages: I, extractor: &SubjectExtractor) -> Vec<Result<Alert>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    messages
        .into_iter()
        .map(|message| {
            let outcome = process_message(message.as_ref(), extractor);
            if let Err(err) = &outcome {
                warn!(error = %err, "skipping inbound message");
            }
            outcome
        })
        .collect()
}
