//! Log sanitization utilities
//!
//! Keeps API keys and oversized response bodies out of debug logs.

use url::Url;

/// Maximum number of bytes of a response body included in a log line.
const TRUNCATE_LIMIT: usize = 256;

/// Query parameter carrying the API key.
const KEY_PARAM: &str = "key";

/// Truncate a string for logging.
///
/// Returns the original string if it's within the limit, otherwise the first
/// `TRUNCATE_LIMIT` bytes (cut on a char boundary) followed by the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }
    let mut end = TRUNCATE_LIMIT;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}... [truncated, total {} bytes]", &s[..end], s.len())
}

/// Render a request URL with the `key` query value replaced by `***`.
pub fn redact_url(url: &Url) -> String {
    if !url.query_pairs().any(|(k, _)| k == KEY_PARAM) {
        return url.to_string();
    }

    let mut redacted = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == KEY_PARAM { "***".into() } else { v };
            (k.into_owned(), v.into_owned())
        })
        .collect();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}
