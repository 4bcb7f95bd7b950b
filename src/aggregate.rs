//! Merging fanned-out enrichment output back into one record per alert.
//!
//! The external orchestrator runs one enrichment branch per subject kind,
//! each branch producing its own serialized copies of the alert carrying a
//! subset of the results. Those copies arrive here as a collection of
//! batches; nothing about batch order or within-batch order is guaranteed
//! beyond the encounter order itself.

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::alert::Alert;

/// Merge batches of serialized [`Alert`] records into one alert per `id`.
///
/// Results are concatenated in encounter order (batch order, then
/// within-batch order); downstream ticket comments rely on that order for
/// readability. Metadata is assumed identical across the copies of one
/// alert, so the last record processed wins. The merged map holds exactly
/// one entry per distinct non-empty `id`, in first-seen order; an id whose
/// records carried no results still survives with an empty result list.
///
/// Records that fail to parse, and records with an empty `id` (nothing to
/// merge under), are dropped with a warning rather than poisoning the whole
/// aggregation.
pub fn combine_results_by_id(batches: &[Vec<String>]) -> IndexMap<String, Alert> {
    let mut merged: IndexMap<String, Alert> = IndexMap::new();

    for raw in batches.iter().flatten() {
        let mut alert: Alert = match serde_json::from_str(raw) {
            Ok(alert) => alert,
            Err(err) => {
                warn!(error = %err, "dropping unparseable enrichment record");
                continue;
            }
        };
        if alert.id.is_empty() {
            warn!("dropping enrichment record with no alert id");
            continue;
        }

        match merged.get_mut(&alert.id) {
            Some(existing) => {
                // Accumulated results stay in front; the newest copy of the
                // metadata replaces the old one.
                let mut results = std::mem::take(&mut existing.results);
                results.append(&mut alert.results);
                alert.results = results;
                *existing = alert;
            }
            None => {
                merged.insert(alert.id.clone(), alert);
            }
        }
    }

    debug!(alerts = merged.len(), "combined enrichment results");
    merged
}
