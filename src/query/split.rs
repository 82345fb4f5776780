//! URL length guard

use tracing::warn;

/// Default per-request URL length ceiling
pub const DEFAULT_MAX_URL_LEN: usize = 2000;

/// Split an over-length queried URL into shorter self-contained URLs.
///
/// A URL at or under `max_len` is returned unchanged as a one-element
/// vector. Otherwise the query string is cut at `&` boundaries only, each
/// piece re-attached to the base path with a fresh `?`, so the union of
/// `key=value` pairs across all pieces equals the pairs of the input with
/// nothing dropped, duplicated or truncated mid-token.
///
/// If a single pair alone exceeds `max_len` the guard cannot shrink
/// further; that piece is emitted oversized as-is and the server's
/// response (typically 414) surfaces as an HTTP status error downstream.
///
/// The result is never empty: a URL whose query cannot be cut (no query,
/// or the degenerate `?` form) passes through unchanged.
pub fn split_url(url: &str, max_len: usize) -> Vec<String> {
    if url.len() <= max_len {
        return vec![url.to_string()];
    }

    let Some((base, query)) = url.split_once('?') else {
        // No query to cut at; nothing we can do.
        warn!(len = url.len(), max_len, "over-length URL has no query to split");
        return vec![url.to_string()];
    };

    let mut pieces = Vec::new();
    let mut current = String::new();

    for pair in query.split('&').filter(|pair| !pair.is_empty()) {
        // base + '?' + current + '&' + pair
        let projected = base.len() + 1 + current.len() + usize::from(!current.is_empty()) + pair.len();
        if !current.is_empty() && projected > max_len {
            pieces.push(format!("{base}?{current}"));
            current.clear();
        }
        if !current.is_empty() {
            current.push('&');
        }
        current.push_str(pair);

        if base.len() + 1 + current.len() > max_len {
            warn!(
                pair_len = pair.len(),
                max_len, "single query pair exceeds the URL length ceiling; sending oversized"
            );
        }
    }

    if !current.is_empty() {
        pieces.push(format!("{base}?{current}"));
    }

    if pieces.is_empty() {
        // Degenerate query (`?` alone, or only empty tokens): nothing to cut.
        warn!(len = url.len(), max_len, "over-length URL has no query pairs to split");
        return vec![url.to_string()];
    }

    pieces
}
