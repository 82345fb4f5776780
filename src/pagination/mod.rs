//! Continuation-marker pagination
//!
//! Some APIs expose the total page count up front; others only embed a
//! continuation marker in each response body, e.g.
//! `<next-page>3</next-page>`. This module extracts that marker and builds
//! the follow-up request URL: the marker text becomes the new value of the
//! page query parameter against the query-stripped endpoint. A marker is
//! consumed by exactly one follow-up request.

use crate::query::Params;

/// Extract the text of `<tag>...</tag>` from an XML-ish body.
///
/// Accepts attribute-bearing open tags (`<tag attr="v">`). Returns `None`
/// when the tag is absent, self-closed, or empty after trimming —
/// any of which terminates a discovery chain.
///
/// This is a deliberate single-tag scan, not an XML parser; response
/// bodies are otherwise opaque to this crate.
pub fn find_marker(body: &str, tag: &str) -> Option<String> {
    let close = format!("</{tag}>");

    let mut search_from = 0;
    while let Some(offset) = body[search_from..].find('<') {
        let open_at = search_from + offset;
        let rest = &body[open_at + 1..];

        if let Some(after_tag) = rest.strip_prefix(tag) {
            // Must be a real open tag: `<tag>` or `<tag attr...>`
            let is_open = match after_tag.chars().next() {
                Some('>') => true,
                Some(c) => c.is_whitespace(),
                None => false,
            };
            if is_open {
                let text_start = open_at + 1 + tag.len() + after_tag.find('>')? + 1;
                let text_end = body[text_start..].find(&close)? + text_start;
                let text = body[text_start..text_end].trim();
                if text.is_empty() {
                    return None;
                }
                return Some(text.to_string());
            }
        }
        search_from = open_at + 1;
    }

    None
}

/// Strip the query string from a URL, leaving the bare endpoint
pub fn strip_query(url: &str) -> &str {
    url.split('?').next().unwrap_or(url)
}

/// Build the follow-up URL for a continuation marker.
///
/// The previous URL's query is discarded and replaced by a fresh query
/// carrying only the page parameter set to the marker text.
pub fn next_page_url(previous_url: &str, marker: &str, page_param: &str) -> String {
    let base = strip_query(previous_url);
    let params = Params::new().set(page_param, marker);
    format!("{base}{}", params.encode())
}
