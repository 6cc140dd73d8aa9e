//! Free-text filtering of gallery entries.
//!
//! The query is treated as a case-insensitive regular expression and run
//! against the file identifier, extended with the file's tags when it has any.

use regex::{Regex, RegexBuilder};
use thiserror::Error;

use crate::model::{Title, TagIndex};

#[derive(Debug, Error)]
pub enum FilterError {
    #[error("invalid filter pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Trim and collapse every whitespace run to a single space.
///
/// U+FEFF counts as whitespace here, as it does for browsers.
pub fn normalize(text: &str) -> String {
    text.split(is_space)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Text a filter is matched against: the identifier, followed by its tags
/// when the tag index has an entry for it.
pub fn haystack(file: &str, tags: &TagIndex) -> String {
    match tags.get(file) {
        Some(t) => format!("{} {}", file, t.join(" ")),
        None => file.to_string(),
    }
}

/// Outcome of matching one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterMatch {
    pub visible: bool,
    pub title: Title,
}

/// A compiled, normalized filter query.
#[derive(Debug, Clone)]
pub struct FilterPattern {
    regex: Regex,
}

impl FilterPattern {
    /// Compile already-normalized `query`. The empty query matches everything.
    pub fn compile(query: &str) -> Result<Self, FilterError> {
        let regex = RegexBuilder::new(query)
            .case_insensitive(true)
            .build()
            .map_err(|source| FilterError::InvalidPattern {
                pattern: query.to_string(),
                source,
            })?;
        Ok(Self { regex })
    }

    /// Match `file` (and its tags) and build the title for `name`.
    ///
    /// Only the last match is emphasized, at its first literal occurrence in
    /// `name`. Earlier matches are overwritten, so a query matching several
    /// places still highlights a single run.
    pub fn apply(&self, file: &str, name: &str, tags: &TagIndex) -> FilterMatch {
        let text = haystack(file, tags);
        let last = self.regex.find_iter(&text).last();
        match last {
            Some(m) => {
                let matched = m.as_str();
                let emphasis = match name.find(matched) {
                    Some(start) if !matched.is_empty() => Some(start..start + matched.len()),
                    _ => None,
                };
                FilterMatch {
                    visible: true,
                    title: Title {
                        text: name.to_string(),
                        emphasis,
                    },
                }
            }
            None => FilterMatch {
                visible: false,
                title: Title::plain(name),
            },
        }
    }
}
