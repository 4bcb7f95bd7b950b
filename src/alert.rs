//! Canonical alert, subject and enrichment-result records.
//!
//! These are the interchange records crossing every pipeline boundary,
//! serialized as JSON with the field names the surrounding orchestrator and
//! the vendor adapters expect.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// SubjectKind
// ---------------------------------------------------------------------------

/// The kind of indicator a [`Subject`] carries. Also the routing key for the
/// enrichment fan-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectKind {
    Ipv4,
    Domain,
    Hostname,
    Url,
}

impl SubjectKind {
    /// Extraction pass order. Subject order within an alert and the `scope`
    /// summary both follow it.
    pub const PASS_ORDER: [SubjectKind; 4] = [
        SubjectKind::Ipv4,
        SubjectKind::Domain,
        SubjectKind::Hostname,
        SubjectKind::Url,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ipv4 => "ipv4",
            Self::Domain => "domain",
            Self::Hostname => "hostname",
            Self::Url => "url",
        }
    }
}

impl fmt::Display for SubjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Subject
// ---------------------------------------------------------------------------

/// One indicator found in an alert, trimmed and ready to be queried against
/// enrichment providers. Within one alert a (kind, value) pair never repeats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub kind: SubjectKind,
    pub value: String,
}

impl Subject {
    pub fn new(kind: SubjectKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// EnrichmentResult
// ---------------------------------------------------------------------------

/// One provider's enrichment outcome for one subject. Created by an external
/// enrichment worker and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichmentResult {
    /// Provider display name.
    pub source: String,
    /// The subject value the lookup was performed against.
    pub attribute_value: String,
    /// Human-readable finding, already formatted for display.
    pub message: String,
    /// Whether the provider call completed without error, independent of
    /// whether anything was found.
    pub success: bool,
}

impl EnrichmentResult {
    /// Render the result as a ticket comment body.
    pub fn prettify(&self) -> String {
        if self.success {
            format!(
                "Details on {} from {}:\n{}",
                self.attribute_value, self.source, self.message
            )
        } else {
            format!(
                "Failed to get info from {}! Error: {}",
                self.source, self.message
            )
        }
    }
}

// ---------------------------------------------------------------------------
// Alert
// ---------------------------------------------------------------------------

/// Canonical representation of one inbound security alert.
///
/// Instantiated once by the normalizer per inbound message, passed by value
/// through each stage. The enrichment fan-out produces independent copies,
/// each carrying a subset of `results`; [`combine_results_by_id`] merges the
/// copies back into one record per `id`.
///
/// [`combine_results_by_id`]: crate::aggregate::combine_results_by_id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Alert {
    /// Stable external identifier (e.g. correlation ID), the aggregation key.
    pub id: String,
    pub name: String,
    pub timestamp: String,
    /// Link back to the alert in the source console.
    pub url: String,
    /// Free-text body the extractors operate on.
    pub raw_message: String,
    /// Extracted indicators, in pass order then first-seen order.
    pub subjects: Vec<Subject>,
    /// Enrichment outcomes, populated after the fan-out.
    pub results: Vec<EnrichmentResult>,
    /// Comma-joined subject kinds present, used by the downstream
    /// orchestrator to decide which enrichment branches to invoke.
    pub scope: String,
}

impl Alert {
    /// Rebuild `scope` from the current subject list.
    pub fn update_scope(&mut self) {
        let mut kinds = Vec::new();
        for kind in SubjectKind::PASS_ORDER {
            if self.subjects.iter().any(|s| s.kind == kind) {
                kinds.push(kind.as_str());
            }
        }
        self.scope = kinds.join(",");
    }
}
