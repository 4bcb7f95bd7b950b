//! URL extraction via a strict URL grammar matcher.

use indexmap::IndexSet;
use linkify::LinkFinder;

use crate::alert::{Subject, SubjectKind};
use crate::safelink::unwrap_safe_link;

use super::dedup_preserving_order;

/// Extract URLs from `text`.
///
/// URL syntax is too varied for the simple boundary regexes the other passes
/// use; the finder is configured strict (a recognized scheme is required)
/// and already handles trailing punctuation and unbalanced brackets. Every
/// match is passed through the safe-link unwrapper, and the unwrapped value
/// is what gets stored; the result is deduplicated a second time since two
/// distinct wrappers can decode to the same destination.
pub(super) fn extract(finder: &LinkFinder, text: &str) -> Vec<Subject> {
    let raw = dedup_preserving_order(finder.links(text).map(|link| link.as_str()));

    let mut unwrapped: IndexSet<String> = IndexSet::new();
    for url in &raw {
        unwrapped.insert(unwrap_safe_link(url));
    }

    unwrapped
        .into_iter()
        .map(|value| Subject::new(SubjectKind::Url, value))
        .collect()
}
