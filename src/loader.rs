//! Startup fetch of the manifest and tag index.

use anyhow::{Context, Result};
use camino::Utf8Path;
use log::info;

use crate::config::GalleryConfig;
use crate::model::{Manifest, TagIndex};
use crate::source::ContentSource;

/// Manifest and tag index of one gallery, as read at startup.
#[derive(Debug, Clone, Default)]
pub struct GalleryData {
    pub manifest: Manifest,
    pub tags: TagIndex,
}

impl GalleryData {
    /// Total number of file identifiers across all categories.
    pub fn file_count(&self) -> usize {
        self.manifest.values().map(Vec::len).sum()
    }
}

/// Read `files.json` then `tags.json` (or the configured names) from `source`.
///
/// Both must be present and well-formed; any failure is fatal for startup.
pub fn load_gallery(source: &mut dyn ContentSource, config: &GalleryConfig) -> Result<GalleryData> {
    let manifest: Manifest = read_json(source, &config.manifest_file)?;
    let tags: TagIndex = read_json(source, &config.tags_file)?;
    let data = GalleryData { manifest, tags };
    info!(
        "loaded gallery {}: {} categories, {} files, {} tagged",
        source.describe(),
        data.manifest.len(),
        data.file_count(),
        data.tags.len()
    );
    Ok(data)
}

fn read_json<T: serde::de::DeserializeOwned>(source: &mut dyn ContentSource, name: &str) -> Result<T> {
    let text = source
        .read_to_string(Utf8Path::new(name))
        .with_context(|| format!("Failed to fetch {} from {}", name, source.describe()))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse {}", name))
}
