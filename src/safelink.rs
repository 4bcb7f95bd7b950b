//! Recovery of the true destination from Microsoft ATP "safe link" wrappers.
//!
//! Corporate mail gateways rewrite URLs in message bodies to route clicks
//! through an inspection host; enriching the wrapper tells us nothing about
//! the real destination. Malformed or truncated wrapped links are common in
//! alert payloads, so every parse failure degrades to returning the wrapper
//! URL unchanged rather than erroring.

use percent_encoding::percent_decode_str;
use tracing::warn;

/// Substring identifying the wrapping host.
const WRAPPER_HOST: &str = "safelinks.protection.outlook.com";

/// Marker preceding the embedded destination URL.
const URL_MARKER: &str = "?url=";

/// Marker separating the destination from the trailing wrapper metadata.
const METADATA_MARKER: &str = "&data=";

/// If `url` is a safe-link wrapper, return the decoded destination URL;
/// otherwise return the input unchanged.
///
/// Both markers must be present for the unwrap to succeed: the destination
/// follows `?url=` percent-encoded, and `&data=` (in the decoded text)
/// terminates it ahead of the appended tracking metadata. Missing either
/// marker means the link is malformed or truncated; the wrapper URL itself is
/// still worth enriching, so it is returned as-is.
pub fn unwrap_safe_link(url: &str) -> String {
    if !url.contains(WRAPPER_HOST) {
        return url.to_string();
    }

    let Some((_, encoded)) = url.split_once(URL_MARKER) else {
        warn!(url, "safe link missing url marker, keeping wrapper");
        return url.to_string();
    };

    let decoded = match percent_decode_str(encoded).decode_utf8() {
        Ok(decoded) => decoded,
        Err(err) => {
            warn!(url, error = %err, "safe link decode failed, keeping wrapper");
            return url.to_string();
        }
    };

    let Some((destination, _)) = decoded.split_once(METADATA_MARKER) else {
        warn!(url, "safe link missing data marker, keeping wrapper");
        return url.to_string();
    };

    destination.to_string()
}
