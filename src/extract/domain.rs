//! Domain name extraction with public-suffix validation.

use std::sync::LazyLock;

use psl::{List, Psl, Type};
use regex::Regex;

use crate::alert::{Subject, SubjectKind};

use super::{bounded_matches, dedup_preserving_order};

/// Dotted sequence of hostname labels (alphanumeric plus hyphen, 1-63 chars
/// each) ending in a letters-only final label.
static DOMAIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z]{2,63}")
        .expect("domain regex")
});

/// The candidate's suffix is a recognized ICANN public suffix. Anything else
/// is an internal or made-up name that no enrichment provider can resolve.
fn has_public_suffix(candidate: &str) -> bool {
    List.suffix(candidate.as_bytes())
        .is_some_and(|suffix| suffix.typ() == Some(Type::Icann))
}

/// Extract publicly resolvable domains from `text`.
///
/// When `ignore` is set, domains containing that substring are dropped as
/// well; deployments use it to keep their own domain out of lookups.
pub(super) fn extract(text: &str, ignore: Option<&str>) -> Vec<Subject> {
    let mut subjects = Vec::new();
    for value in dedup_preserving_order(bounded_matches(&DOMAIN_RE, text)) {
        if !has_public_suffix(&value) {
            continue;
        }
        if ignore.is_some_and(|substring| value.contains(substring)) {
            continue;
        }
        subjects.push(Subject::new(SubjectKind::Domain, value));
    }
    subjects
}
