//! Tests for the indicator extractors.

use super::SubjectExtractor;
use crate::alert::{Alert, SubjectKind};
use crate::config::ExtractorConfig;
use crate::error::PipelineError;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn extractor(config: ExtractorConfig) -> SubjectExtractor {
    SubjectExtractor::new(&config).unwrap()
}

fn values(subjects: &[crate::alert::Subject], kind: SubjectKind) -> Vec<&str> {
    subjects
        .iter()
        .filter(|s| s.kind == kind)
        .map(|s| s.value.as_str())
        .collect()
}

// ---------------------------------------------------------------------------
// IPv4
// ---------------------------------------------------------------------------

#[test]
fn test_ipv4_extraction_boundaries_private_and_dedup() {
    let ua1 = "Mozilla/5.0 (X11; U; Linux i686; en-US; rv:1.8.1.3) Gecko/20070517 BonEcho/2.0.0.3";
    let ua2 = "Mozilla/5.0 (X11; ; Linux i686; rv:1.9.2.20) Gecko/20110805";
    let message =
        format!("8.8.8.8 {ua1}  [202.92.65.254, 3.3.3.3] 192.168.1.1 ip=151.101.29.67 {ua2} 151.101.29.67}}");

    let subjects = extractor(ExtractorConfig::default()).extract(&message);
    assert_eq!(
        values(&subjects, SubjectKind::Ipv4),
        vec!["8.8.8.8", "202.92.65.254", "3.3.3.3", "151.101.29.67"]
    );
}

#[test]
fn test_ipv4_private_ranges_never_emitted() {
    let message = "10.1.2.3 172.16.0.1 172.31.255.254 192.168.0.1 127.0.0.1 198.51.100.7";
    let subjects = extractor(ExtractorConfig::default()).extract(message);
    assert_eq!(values(&subjects, SubjectKind::Ipv4), vec!["198.51.100.7"]);
}

#[test]
fn test_ipv4_embedded_in_larger_token_skipped() {
    // Dotted quads glued to other tokens (version strings, paths) are not
    // indicators.
    let subjects =
        extractor(ExtractorConfig::default()).extract("rv:1.8.1.3 v2.0.0.3 /8.8.8.8/ x8.8.8.8");
    assert!(values(&subjects, SubjectKind::Ipv4).is_empty());
}

#[test]
fn test_ipv4_octet_range_enforced() {
    let subjects = extractor(ExtractorConfig::default()).extract("300.1.1.1 256.256.256.256 9.9.9.9");
    assert_eq!(values(&subjects, SubjectKind::Ipv4), vec!["9.9.9.9"]);
}

// ---------------------------------------------------------------------------
// Domains
// ---------------------------------------------------------------------------

#[test]
fn test_domain_public_suffix_required() {
    let subjects = extractor(ExtractorConfig::default()).extract("google.com internal.example");
    assert_eq!(values(&subjects, SubjectKind::Domain), vec!["google.com"]);
}

#[test]
fn test_domain_ignore_substring() {
    let config = ExtractorConfig {
        ignore_domain: Some("corp.example.org".into()),
        ..ExtractorConfig::default()
    };
    let subjects =
        extractor(config).extract("evil.net login.corp.example.org phish.co.uk");
    assert_eq!(
        values(&subjects, SubjectKind::Domain),
        vec!["evil.net", "phish.co.uk"]
    );
}

#[test]
fn test_domain_dedup_and_boundaries() {
    let message = "{bad.org, bad.org} host=bad.org mail.bad.org https://skip.me.org/path";
    let subjects = extractor(ExtractorConfig::default()).extract(message);
    // The domain inside the URL is glued to "https://" and left to the URL
    // pass; the bare candidates dedup to first-seen order.
    assert_eq!(
        values(&subjects, SubjectKind::Domain),
        vec!["bad.org", "mail.bad.org"]
    );
}

// ---------------------------------------------------------------------------
// Hostnames
// ---------------------------------------------------------------------------

#[test]
fn test_hostname_extraction_with_pattern() {
    let config = ExtractorConfig {
        host_pattern: Some(r"ABC-\d{5}".into()),
        ..ExtractorConfig::default()
    };
    let subjects = extractor(config).extract("ABC-12345  [X123487822, ABC-54321] X123487822}");
    assert_eq!(
        values(&subjects, SubjectKind::Hostname),
        vec!["ABC-12345", "ABC-54321"]
    );
}

#[test]
fn test_hostname_no_pattern_yields_nothing() {
    let subjects = extractor(ExtractorConfig::default()).extract("ABC-12345}");
    assert!(values(&subjects, SubjectKind::Hostname).is_empty());
}

#[test]
fn test_hostname_invalid_pattern_is_an_error() {
    let config = ExtractorConfig {
        host_pattern: Some("ABC-(".into()),
        ..ExtractorConfig::default()
    };
    assert!(matches!(
        SubjectExtractor::new(&config),
        Err(PipelineError::InvalidHostPattern(_))
    ));
}

// ---------------------------------------------------------------------------
// URLs
// ---------------------------------------------------------------------------

const WRAPPED: &str = "https://apc04.safelinks.protection.outlook.com/?url=https%3A%2F%2Fdocs.testsite.int%2Ffile%2Fim0w22da6434202ce486e98ae85196b5ccc76&data=02%7C01%7Cwoot.woot%40test.com%7C2990160b578248181f4008d79461f071%7C4f4f4c56a772461a967e7890c3960b3a%7C1%7C1%7C637141020687342499&sdata=MNYejoOQbAVPTD1ijNbwMIfl8LV8E4JlP396Pm4470E%3D&reserved=0";

#[test]
fn test_url_extraction_and_safelink_unwrap() {
    let url1 = "http://google.com/test/awesome?test";
    let url2 = "https://github.com/gyrospectre/squyre";
    let message = format!("ABC 12345  [ABC {url1}, {url2}] ABC {url1}}} {WRAPPED}");

    let subjects = extractor(ExtractorConfig::default()).extract(&message);
    assert_eq!(
        values(&subjects, SubjectKind::Url),
        vec![
            url1,
            url2,
            "https://docs.testsite.int/file/im0w22da6434202ce486e98ae85196b5ccc76",
        ]
    );
}

#[test]
fn test_url_malformed_safelinks_kept_as_wrappers() {
    // Marker 1 missing on the first, marker 2 missing on the second; both
    // degrade to the wrapper URL itself. The third is well formed.
    let missing_url = "https://apc04.safelinks.protection.outlook.com/?rl=https%3A%2F%2Fdocs.testsite.int%2Ffile%2Fim0w22da6434202ce486e98ae85196b5ccc76";
    let missing_data = "https://apc04.safelinks.protection.outlook.com/?url=https%3A%2F%2Fdocs.testsite.int%2Ffile%2Fim0w22da6434202ce486e98ae85196b5ccc76data=02%7C01%7Cwoot.woot%40test.com%7C2990160b578248181f4008d79461f071%7C4f4f4c56a772461a967e7890c3960b3a%7C1%7C1%7C637141020687342499sdata=MNYejoOQbAVPTD1ijNbwMIfl8LV8E4JlP396Pm4470E%3Dreserved=0";
    let message = format!("ABC {missing_url}: {missing_data} {{ {WRAPPED}");

    let subjects = extractor(ExtractorConfig::default()).extract(&message);
    assert_eq!(
        values(&subjects, SubjectKind::Url),
        vec![
            missing_url,
            missing_data,
            "https://docs.testsite.int/file/im0w22da6434202ce486e98ae85196b5ccc76",
        ]
    );
}

#[test]
fn test_url_scheme_required() {
    let subjects = extractor(ExtractorConfig::default()).extract("www.nope.com ftp.files.net");
    assert!(values(&subjects, SubjectKind::Url).is_empty());
}

// ---------------------------------------------------------------------------
// Cross-pass behavior
// ---------------------------------------------------------------------------

#[test]
fn test_pass_order_and_no_duplicate_pairs() {
    let config = ExtractorConfig {
        host_pattern: Some(r"ABC-\d{5}".into()),
        ..ExtractorConfig::default()
    };
    let message = "https://evil.net/p 8.8.8.8 evil.net ABC-11111 8.8.8.8 evil.net";
    let subjects = extractor(config).extract(message);

    let kinds: Vec<SubjectKind> = subjects.iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        vec![
            SubjectKind::Ipv4,
            SubjectKind::Domain,
            SubjectKind::Hostname,
            SubjectKind::Url,
        ]
    );

    let mut pairs: Vec<(SubjectKind, &str)> =
        subjects.iter().map(|s| (s.kind, s.value.as_str())).collect();
    pairs.sort();
    pairs.dedup();
    assert_eq!(pairs.len(), subjects.len());
}

#[test]
fn test_populate_sets_scope_and_rejects_empty() {
    let extractor = extractor(ExtractorConfig::default());

    let mut alert = Alert {
        id: "a-1".into(),
        raw_message: "traffic from 8.8.8.8 to files.evil.net via https://evil.net/dl".into(),
        ..Alert::default()
    };
    extractor.populate(&mut alert).unwrap();
    assert_eq!(alert.scope, "ipv4,domain,url");

    let mut empty = Alert {
        id: "a-2".into(),
        raw_message: "nothing interesting here".into(),
        ..Alert::default()
    };
    match extractor.populate(&mut empty) {
        Err(PipelineError::NoSubjectsFound(id)) => assert_eq!(id, "a-2"),
        other => panic!("expected NoSubjectsFound, got {:?}", other),
    }
    assert_eq!(empty.scope, "");
}
