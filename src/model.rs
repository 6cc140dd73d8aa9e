//! Data model for a categorized example gallery.
//!
//! The manifest and tag index are loaded once at startup and never change.
//! Entries and category headers are owned by the
//! [`CatalogController`](crate::controller::CatalogController), which mutates
//! only their visibility and selection flags.

use std::collections::HashMap;
use std::ops::Range;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Category name -> ordered file identifiers, in document order.
pub type Manifest = IndexMap<String, Vec<String>>;

/// File identifier -> tags. Only used to broaden filter matching.
pub type TagIndex = HashMap<String, Vec<String>>;

/// Human-readable name for a file identifier.
///
/// The first `_`-delimited segment (the numeric or category prefix) is
/// dropped and the remaining segments are joined with `" / "`, so
/// `webgl_loader_gltf` becomes `loader / gltf`.
pub fn display_name(file: &str) -> String {
    file.split('_').skip(1).collect::<Vec<_>>().join(" / ")
}

/// Rendered title of an entry: the display name plus an optional
/// emphasized byte range within it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Title {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emphasis: Option<Range<usize>>,
}

impl Title {
    /// Title without emphasis.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasis: None,
        }
    }

    /// Split the title into `(text, emphasized)` runs, skipping empty runs.
    pub fn segments(&self) -> Vec<(&str, bool)> {
        let t = self.text.as_str();
        match &self.emphasis {
            Some(r)
                if r.start < r.end
                    && r.end <= t.len()
                    && t.is_char_boundary(r.start)
                    && t.is_char_boundary(r.end) =>
            {
                let mut out = Vec::with_capacity(3);
                if r.start > 0 {
                    out.push((&t[..r.start], false));
                }
                out.push((&t[r.clone()], true));
                if r.end < t.len() {
                    out.push((&t[r.end..], false));
                }
                out
            }
            _ if t.is_empty() => Vec::new(),
            _ => vec![(t, false)],
        }
    }

    /// The emphasized substring, if any.
    pub fn emphasized(&self) -> Option<&str> {
        self.segments()
            .into_iter()
            .find(|(_, emphasized)| *emphasized)
            .map(|(s, _)| s)
    }
}

/// One navigation item, created per manifest file identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub file: String,
    pub name: String,
    pub title: Title,
    /// Index of the owning category in manifest order.
    pub category: usize,
    pub hidden: bool,
    pub selected: bool,
}

impl Entry {
    pub fn new(file: &str, category: usize) -> Self {
        let name = display_name(file);
        Self {
            file: file.to_string(),
            title: Title::plain(name.clone()),
            name,
            category,
            hidden: false,
            selected: false,
        }
    }
}

/// Category header in the navigation list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryHeader {
    pub name: String,
    /// Indices into the controller's entry list, in manifest order.
    pub entries: Vec<usize>,
    /// Set when every entry of the category is hidden.
    pub collapsed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_split_around_emphasis() {
        let t = Title {
            text: "loader / gltf".into(),
            emphasis: Some(0..6),
        };
        assert_eq!(t.segments(), vec![("loader", true), (" / gltf", false)]);
    }

    #[test]
    fn empty_or_out_of_range_emphasis_is_plain() {
        for r in [3..3, 2..99] {
            let t = Title {
                text: "basic".into(),
                emphasis: Some(r),
            };
            assert_eq!(t.segments(), vec![("basic", false)]);
            assert_eq!(t.emphasized(), None);
        }
    }
}
