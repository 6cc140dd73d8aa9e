#![cfg(feature = "egui")]

use camino::Utf8PathBuf;
use eframe::egui;

use crate::controller::CatalogController;

/// Interactive Egui application browsing one gallery directory.
pub struct GalleryApp {
    pub catalog: CatalogController,
    /// Directory the gallery was loaded from; thumbnails and documents are
    /// resolved against it.
    pub root: Utf8PathBuf,
    /// Last filter error, shown under the search box.
    pub filter_error: Option<String>,
}

impl GalleryApp {
    pub fn new(catalog: CatalogController, root: Utf8PathBuf) -> Self {
        Self {
            catalog,
            root,
            filter_error: None,
        }
    }

    /// `file://` URI for a path relative to the gallery root.
    pub fn file_uri(&self, relative: &str) -> String {
        let abs = self.root.join(relative.trim_start_matches('/'));
        format!("file://{}", abs)
    }

    /// Apply the search box contents, remembering a pattern error if any.
    pub fn apply_filter_input(&mut self, raw: &str) {
        self.filter_error = self
            .catalog
            .set_filter_input(raw)
            .err()
            .map(|e| e.to_string());
    }

    pub fn exit_search(&mut self) {
        self.catalog.exit_search();
        self.filter_error = None;
    }
}

impl eframe::App for GalleryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        super::ui::update(self, ctx);
    }
}
