use url::Url;

use crate::constants::DEFAULT_INCREMENT;
use crate::error::ForgeError;

/// An incoming page request: the URL path plus the raw query string.
///
/// The query string is stored verbatim so the backend call can forward it
/// byte-for-byte, unrecognized parameters included. The typed accessors
/// percent-decode on read.
#[derive(Debug, Clone)]
pub struct PageRequest {
    path: String,
    query: String,
}

impl PageRequest {
    pub fn new(path: impl AsRef<str>, query: impl AsRef<str>) -> Result<PageRequest, ForgeError> {
        let path = path.as_ref();
        if !path.starts_with('/') || path.trim_matches('/').is_empty() {
            return Err(ForgeError::invalid_page_route(path));
        }
        Ok(PageRequest {
            path: path.to_string(),
            query: query.as_ref().to_string(),
        })
    }

    /// Parse a path-and-query string, e.g. `/ox/forge?rev=abc123&increment=10`.
    pub fn parse(raw: impl AsRef<str>) -> Result<PageRequest, ForgeError> {
        let raw = raw.as_ref();
        match raw.split_once('?') {
            Some((path, query)) => PageRequest::new(path, query),
            None => PageRequest::new(raw, ""),
        }
    }

    pub fn from_url(url: &Url) -> Result<PageRequest, ForgeError> {
        PageRequest::new(url.path(), url.query().unwrap_or(""))
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// The raw query string, without the leading `?`.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The page path with its leading `/` stripped, which is the route the
    /// backend API expects.
    pub fn api_path(&self) -> &str {
        self.path.strip_prefix('/').unwrap_or(&self.path)
    }

    /// First occurrence of a query parameter, percent-decoded.
    pub fn param(&self, name: &str) -> Option<String> {
        url::form_urlencoded::parse(self.query.as_bytes())
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }

    /// The `rev` override, if present and non-empty.
    pub fn rev(&self) -> Option<String> {
        self.param("rev").filter(|rev| !rev.is_empty())
    }

    /// The pagination step. Absent or unparsable values fall back to zero.
    pub fn increment(&self) -> i64 {
        match self.param("increment") {
            Some(value) => value.parse::<i64>().unwrap_or(DEFAULT_INCREMENT),
            None => DEFAULT_INCREMENT,
        }
    }
}
