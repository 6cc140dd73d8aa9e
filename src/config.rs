//! Gallery configuration: where the manifest lives and how links are built.

use anyhow::{Context, Result};
use camino::Utf8Path;
use serde::{Deserialize, Serialize};

/// Default template for the "view source" link. `{file}` is replaced with the
/// file identifier.
pub const DEFAULT_SOURCE_TEMPLATE: &str =
    "https://github.com/mrdoob/three.js/blob/master/examples/{file}.html";

/// Settings for one gallery. Every key is optional in the JSON form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Manifest file (category -> file identifiers).
    pub manifest_file: String,
    /// Tag index file (file identifier -> tags).
    pub tags_file: String,
    pub links: LinkTemplates,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            manifest_file: "files.json".to_string(),
            tags_file: "tags.json".to_string(),
            links: LinkTemplates::default(),
        }
    }
}

impl GalleryConfig {
    /// Load a config from a JSON file. Missing keys keep their defaults.
    pub fn from_file(path: &Utf8Path) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_std_path())
            .with_context(|| format!("Failed to read config {}", path))?;
        serde_json::from_str(&text).with_context(|| format!("Invalid config {}", path))
    }
}

/// Templates for the links rendered per entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkTemplates {
    /// External "view source" link; `{file}` is substituted.
    pub source: String,
    /// Directory holding `<file>.jpg` thumbnails, relative to the gallery.
    pub screenshots: String,
}

impl Default for LinkTemplates {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE_TEMPLATE.to_string(),
            screenshots: "screenshots".to_string(),
        }
    }
}

impl LinkTemplates {
    pub fn source_url(&self, file: &str) -> String {
        self.source.replace("{file}", file)
    }

    pub fn screenshot(&self, file: &str) -> String {
        let dir = self.screenshots.trim_end_matches('/');
        if dir.is_empty() {
            format!("{file}.jpg")
        } else {
            format!("{dir}/{file}.jpg")
        }
    }
}
