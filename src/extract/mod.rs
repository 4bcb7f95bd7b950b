//! Indicator extraction over the alert's free-text body.
//!
//! Four independent passes run in a fixed order: IPv4 addresses, public
//! domains, internal hostnames, URLs. Each pass is boundary-aware and
//! deduplicates its matches in first-seen order, so a (kind, value) pair
//! never repeats within one alert and the subject order is deterministic.

use indexmap::IndexSet;
use linkify::{LinkFinder, LinkKind};
use regex::Regex;
use tracing::debug;

use crate::alert::{Alert, Subject};
use crate::config::ExtractorConfig;
use crate::error::{PipelineError, Result};

mod domain;
mod hostname;
mod ipv4;
mod url;

#[cfg(test)]
mod tests;

/// Characters that may delimit an indicator inside the raw text, besides
/// whitespace and the ends of the string. Anything else touching a candidate
/// (a dot, a slash, a colon) means it is part of a larger token, e.g. a
/// version number, and must not be extracted.
const BOUNDARY_CHARS: [char; 6] = ['{', '}', '[', ']', '=', ','];

fn is_boundary(c: char) -> bool {
    c.is_whitespace() || BOUNDARY_CHARS.contains(&c)
}

/// All matches of `re` in `text` whose spans are delimited by boundary
/// characters (or the ends of the string) on both sides, in match order.
fn bounded_matches<'t>(re: &Regex, text: &'t str) -> Vec<&'t str> {
    let mut matches = Vec::new();
    for m in re.find_iter(text) {
        let before_ok = text[..m.start()].chars().next_back().map_or(true, is_boundary);
        let after_ok = text[m.end()..].chars().next().map_or(true, is_boundary);
        if before_ok && after_ok {
            matches.push(m.as_str());
        }
    }
    matches
}

/// Drop repeated values, keeping the first occurrence of each in order.
fn dedup_preserving_order<'t>(values: impl IntoIterator<Item = &'t str>) -> Vec<String> {
    let mut seen: IndexSet<&str> = IndexSet::new();
    for value in values {
        seen.insert(value);
    }
    seen.into_iter().map(str::to_string).collect()
}

// ---------------------------------------------------------------------------
// SubjectExtractor
// ---------------------------------------------------------------------------

/// The four extraction passes, with per-deployment configuration compiled
/// once up front.
pub struct SubjectExtractor {
    host_pattern: Option<Regex>,
    ignore_domain: Option<String>,
    link_finder: LinkFinder,
}

impl SubjectExtractor {
    /// Compile the configured patterns. Fails only on an invalid hostname
    /// pattern; an absent pattern just disables the hostname pass.
    pub fn new(config: &ExtractorConfig) -> Result<Self> {
        let host_pattern = config.host_pattern().map(Regex::new).transpose()?;

        let mut link_finder = LinkFinder::new();
        link_finder.kinds(&[LinkKind::Url]).url_must_have_scheme(true);

        Ok(Self {
            host_pattern,
            ignore_domain: config.ignore_domain().map(str::to_string),
            link_finder,
        })
    }

    /// Run all passes over `text`, in pass order.
    pub fn extract(&self, text: &str) -> Vec<Subject> {
        let mut subjects = ipv4::extract(text);
        subjects.extend(domain::extract(text, self.ignore_domain.as_deref()));
        subjects.extend(hostname::extract(self.host_pattern.as_ref(), text));
        subjects.extend(url::extract(&self.link_finder, text));
        subjects
    }

    /// Populate `alert.subjects` and `alert.scope` from its raw message.
    ///
    /// An alert with nothing to enrich is a terminal, non-retryable condition
    /// for that alert and is surfaced as [`PipelineError::NoSubjectsFound`].
    pub fn populate(&self, alert: &mut Alert) -> Result<()> {
        alert.subjects = self.extract(&alert.raw_message);
        alert.update_scope();
        if alert.subjects.is_empty() {
            return Err(PipelineError::NoSubjectsFound(alert.id.clone()));
        }
        debug!(
            alert = %alert.id,
            count = alert.subjects.len(),
            scope = %alert.scope,
            "extracted subjects"
        );
        Ok(())
    }
}
