//! URL state shared between the navigation list and the address bar.
//!
//! Only the parts the catalog cares about are modelled: the path (to resolve
//! sibling documents), the query string (carrying the `q` filter parameter)
//! and the hash fragment (carrying the selected file identifier). Updates
//! replace state in place; nothing here navigates.

use std::fmt;

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};

/// Characters escaped when writing the filter into the query string.
const QUERY: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>');

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    path: String,
    /// Query without the leading `?`.
    query: Option<String>,
    /// Fragment without the leading `#`.
    hash: Option<String>,
}

impl Location {
    /// Parse `path?query#hash`. Scheme and host, if present, stay part of the path.
    pub fn parse(url: &str) -> Self {
        let (rest, hash) = match url.split_once('#') {
            Some((r, h)) => (r, Some(h.to_string())),
            None => (url, None),
        };
        let (path, query) = match rest.split_once('?') {
            Some((p, q)) => (p, Some(q.to_string())),
            None => (rest, None),
        };
        Self {
            path: path.to_string(),
            query: query.filter(|q| !q.is_empty()),
            hash: hash.filter(|h| !h.is_empty()),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Raw fragment without `#`; `None` when absent or empty.
    pub fn hash(&self) -> Option<&str> {
        self.hash.as_deref()
    }

    pub fn set_hash(&mut self, hash: &str) {
        self.hash = if hash.is_empty() {
            None
        } else {
            Some(hash.to_string())
        };
    }

    /// Filter text carried by a query of the form `q=<text>`, percent-decoded.
    /// Any other query shape yields an empty filter.
    pub fn filter_query(&self) -> String {
        match self.query.as_deref().and_then(|q| q.strip_prefix("q=")) {
            Some(raw) => percent_decode_str(raw).decode_utf8_lossy().into_owned(),
            None => String::new(),
        }
    }

    /// Replace the query with `q=<text>`, or drop it when `text` is empty.
    /// The path and hash are preserved.
    pub fn replace_filter_query(&mut self, text: &str) {
        self.query = if text.is_empty() {
            None
        } else {
            Some(format!("q={}", utf8_percent_encode(text, QUERY)))
        };
    }

    /// Resolve a document name against the directory of the current path.
    pub fn resolve_sibling(&self, document: &str) -> String {
        match self.path.rfind('/') {
            Some(i) => format!("{}{}", &self.path[..=i], document),
            None => document.to_string(),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        if let Some(q) = &self.query {
            write!(f, "?{}", q)?;
        }
        if let Some(h) = &self.hash {
            write!(f, "#{}", h)?;
        }
        Ok(())
    }
}
