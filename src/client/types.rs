//! Input types for the client trait

use crate::query::Params;

/// One or many endpoint strings handed to [`crate::client::RestApi::get`].
///
/// Accepts a single path, a full URL, or a list of either.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Endpoints(Vec<String>);

impl Endpoints {
    /// Consume into the underlying list
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }

    /// Whether no endpoint was supplied
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Endpoints {
    fn from(endpoint: &str) -> Self {
        Self(vec![endpoint.to_string()])
    }
}

impl From<String> for Endpoints {
    fn from(endpoint: String) -> Self {
        Self(vec![endpoint])
    }
}

impl From<Vec<String>> for Endpoints {
    fn from(endpoints: Vec<String>) -> Self {
        Self(endpoints)
    }
}

impl From<Vec<&str>> for Endpoints {
    fn from(endpoints: Vec<&str>) -> Self {
        Self(endpoints.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Endpoints {
    fn from(endpoints: &[&str]) -> Self {
        Self(endpoints.iter().map(|e| (*e).to_string()).collect())
    }
}

/// Options for a [`crate::client::RestApi::get`] call
#[derive(Debug, Clone)]
pub struct GetOptions {
    /// Query parameters; attached to the first endpoint only
    pub params: Option<Params>,
    /// Known page count for bulk pagination
    pub total_pages: Option<u32>,
    /// Follow continuation markers past the first page (default `true`)
    pub all_pages: bool,
}

impl Default for GetOptions {
    fn default() -> Self {
        Self {
            params: None,
            total_pages: None,
            all_pages: true,
        }
    }
}

impl GetOptions {
    /// Create default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach query parameters
    #[must_use]
    pub fn params(mut self, params: Params) -> Self {
        self.params = Some(params);
        self
    }

    /// Fetch a known number of pages concurrently
    #[must_use]
    pub fn total_pages(mut self, n: u32) -> Self {
        self.total_pages = Some(n);
        self
    }

    /// Stop after the first page instead of following markers
    #[must_use]
    pub fn first_page_only(mut self) -> Self {
        self.all_pages = false;
        self
    }
}
