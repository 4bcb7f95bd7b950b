//! IPv4 address extraction.

use std::net::Ipv4Addr;
use std::sync::LazyLock;

use regex::Regex;

use crate::alert::{Subject, SubjectKind};

use super::{bounded_matches, dedup_preserving_order};

/// Dotted quad with each octet held to 0-255.
static IPV4_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)(?:\.(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)){3}")
        .expect("ipv4 regex")
});

/// Extract public, routable IPv4 addresses from `text`.
///
/// Addresses in the private ranges (10/8, 172.16/12, 192.168/16) and
/// loopback (127/8) are dropped silently: enrichment providers have no data
/// on non-routable addresses, so such hits are noise.
pub(super) fn extract(text: &str) -> Vec<Subject> {
    let mut subjects = Vec::new();
    for value in dedup_preserving_order(bounded_matches(&IPV4_RE, text)) {
        let Ok(address) = value.parse::<Ipv4Addr>() else {
            continue;
        };
        if address.is_private() || address.is_loopback() {
            continue;
        }
        subjects.push(Subject::new(SubjectKind::Ipv4, value));
    }
    subjects
}
