//! Content source abstraction for reading gallery files from a directory or a ZIP archive.

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::io::Read;

/// Trait for abstracting file I/O (gallery directory vs. ZIP archive).
pub trait ContentSource {
    /// Read a file at the given path, relative to the gallery root.
    fn read_to_string(&mut self, path: &Utf8Path) -> Result<String>;
    /// Human-readable location of the gallery, used in error messages.
    fn describe(&self) -> String;
}

/// Reads gallery files from a directory on the local filesystem.
pub struct FsSource {
    root: Utf8PathBuf,
}

impl FsSource {
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ContentSource for FsSource {
    fn read_to_string(&mut self, path: &Utf8Path) -> Result<String> {
        let full = self.root.join(path);
        std::fs::read_to_string(full.as_std_path()).with_context(|| format!("Failed to read {}", full))
    }

    fn describe(&self) -> String {
        self.root.to_string()
    }
}

/// Reads gallery files from a ZIP archive.
pub struct ZipSource<R: Read + std::io::Seek> {
    zip: zip::ZipArchive<R>,
    /// Directory inside the archive that holds the manifest.
    prefix: String,
}

impl<R: Read + std::io::Seek> ZipSource<R> {
    pub fn new(reader: R) -> Result<Self> {
        let zip = zip::ZipArchive::new(reader).context("Failed to open zip archive")?;
        Ok(Self {
            zip,
            prefix: String::new(),
        })
    }

    /// Resolve paths below `prefix` inside the archive (e.g. `examples/`).
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        let mut p = prefix
            .trim_start_matches("./")
            .trim_start_matches('/')
            .to_string();
        if !p.is_empty() && !p.ends_with('/') {
            p.push('/');
        }
        self.prefix = p;
        self
    }
}

impl<R: Read + std::io::Seek> ContentSource for ZipSource<R> {
    fn read_to_string(&mut self, path: &Utf8Path) -> Result<String> {
        let p = format!(
            "{}{}",
            self.prefix,
            path.as_str().trim_start_matches("./").trim_start_matches('/')
        );
        let mut f = self
            .zip
            .by_name(&p)
            .with_context(|| format!("File {} not found in zip", p))?;
        let mut s = String::new();
        f.read_to_string(&mut s)
            .with_context(|| format!("Failed to read {} from zip", p))?;
        Ok(s)
    }

    fn describe(&self) -> String {
        if self.prefix.is_empty() {
            "<zip>".to_string()
        } else {
            format!("<zip>/{}", self.prefix.trim_end_matches('/'))
        }
    }
}

/// Open a gallery at `path`: `.zip` files are read as archives, anything else
/// as a directory. `zip_prefix` selects the gallery directory inside an archive
/// and is ignored for directories.
pub fn open_gallery(path: &Utf8Path, zip_prefix: Option<&str>) -> Result<Box<dyn ContentSource>> {
    if path.extension() == Some("zip") {
        let file = std::fs::File::open(path).with_context(|| format!("Open {}", path))?;
        let reader = std::io::BufReader::new(file);
        let mut zip = ZipSource::new(reader)?;
        if let Some(prefix) = zip_prefix {
            zip = zip.with_prefix(prefix);
        }
        Ok(Box::new(zip))
    } else {
        Ok(Box::new(FsSource::new(path)))
    }
}
