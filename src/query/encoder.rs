//! Canonical query parameter encoding

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// An ordered, deduplicated set of query parameters.
///
/// Values under the same key are merged into a set, so no `key=value` pair
/// ever appears twice in the encoded output. Encoding is fully
/// deterministic: keys are visited in sorted order and values are sorted
/// lexicographically within a key.
///
/// Values are serialized verbatim, without percent-encoding. This matches
/// the wire format of the services this client targets; callers passing
/// values with `&`, `=` or `?` in them are responsible for escaping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {
    values: BTreeMap<String, BTreeSet<String>>,
}

impl Params {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single value under a key, merging with any existing values
    #[must_use]
    pub fn set(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    /// Add a collection of values under a key, merging and deduplicating
    #[must_use]
    pub fn set_all<I>(mut self, key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        let entry = self.values.entry(key.into()).or_default();
        for value in values {
            entry.insert(value.to_string());
        }
        self
    }

    /// Add a single value under a key, merging with any existing values
    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) {
        self.values
            .entry(key.into())
            .or_default()
            .insert(value.to_string());
    }

    /// Replace all values under a key with a single value
    pub fn replace(&mut self, key: impl Into<String>, value: impl ToString) {
        let mut values = BTreeSet::new();
        values.insert(value.to_string());
        self.values.insert(key.into(), values);
    }

    /// Whether the set holds no parameters
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Iterate over `(key, value)` pairs in canonical order
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().flat_map(|(key, values)| {
            values.iter().map(move |value| (key.as_str(), value.as_str()))
        })
    }

    /// Serialize to a query string with a leading `?`.
    ///
    /// An empty parameter set encodes to the degenerate form `?`, which
    /// callers must tolerate.
    pub fn encode(&self) -> String {
        let mut query = String::from("?");
        for (i, (key, value)) in self.pairs().enumerate() {
            if i > 0 {
                query.push('&');
            }
            query.push_str(key);
            query.push('=');
            query.push_str(value);
        }
        query
    }
}
