//! Allow-list of viewer documents, built from the manifest.
//!
//! File names taken from the URL hash are untrusted. They are only ever used
//! as lookup keys here; the navigation target always comes from the map.

use indexmap::IndexMap;

use crate::model::Manifest;

#[derive(Debug, Clone, Default)]
pub struct RedirectAllowList {
    targets: IndexMap<String, String>,
}

impl RedirectAllowList {
    pub fn from_manifest(manifest: &Manifest) -> Self {
        let mut list = Self::default();
        for file in manifest.values().flatten() {
            list.register(file);
        }
        list
    }

    /// Map `file` to its viewer document `<file>.html`.
    pub fn register(&mut self, file: &str) {
        self.targets.insert(file.to_string(), format!("{file}.html"));
    }

    pub fn contains(&self, file: &str) -> bool {
        self.targets.contains_key(file)
    }

    /// Viewer document for an allow-listed file, `None` otherwise.
    pub fn resolve(&self, file: &str) -> Option<&str> {
        self.targets.get(file).map(String::as_str)
    }
}
