//! Internal hostname extraction against an operator-configured pattern.

use regex::Regex;
use tracing::warn;

use crate::alert::{Subject, SubjectKind};

use super::{bounded_matches, dedup_preserving_order};

/// Extract internal hostnames from `text` using the configured naming
/// convention pattern.
///
/// Internal host lookups are an optional capability: with no pattern
/// configured this pass yields nothing and logs a warning rather than
/// failing. Unlike the IP and domain passes, every pattern match is
/// considered in scope.
pub(super) fn extract(pattern: Option<&Regex>, text: &str) -> Vec<Subject> {
    let Some(re) = pattern else {
        warn!("no host pattern configured, skipping hostname extraction");
        return Vec::new();
    };

    dedup_preserving_order(bounded_matches(re, text))
        .into_iter()
        .map(|value| Subject::new(SubjectKind::Hostname, value))
        .collect()
}
