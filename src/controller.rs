//! The catalog controller: builds the navigation list from the manifest and
//! keeps selection, filter text and URL state in sync.
//!
//! All state lives in explicit fields. Front-ends (HTML, egui) render from
//! the accessors and feed user events back through the `&mut self` methods.

use std::collections::HashMap;

use log::{debug, warn};
use serde::Serialize;

use crate::config::LinkTemplates;
use crate::filter::{FilterError, FilterPattern, normalize};
use crate::location::Location;
use crate::model::{CategoryHeader, Entry, Manifest, TagIndex, display_name};
use crate::redirect::RedirectAllowList;
use crate::viewport::{ViewerSize, ViewerState};

/// Expandable parts of the navigation panel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PanelState {
    /// Overlay panel expanded (narrow layouts).
    pub open: bool,
    /// Search affordance expanded.
    pub search_focused: bool,
    /// Thumbnails hidden.
    pub minimal: bool,
}

/// The "view source" affordance, revealed on first selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceLink {
    pub href: String,
    pub title: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Primary,
    Middle,
    Secondary,
}

/// A click on an entry's link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkClick {
    pub button: MouseButton,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl LinkClick {
    pub fn primary() -> Self {
        Self {
            button: MouseButton::Primary,
            ctrl: false,
            alt: false,
            meta: false,
        }
    }

    fn is_plain_primary(&self) -> bool {
        self.button == MouseButton::Primary && !self.ctrl && !self.alt && !self.meta
    }
}

/// What a click on an entry did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Selected and loaded into the viewer.
    Selected,
    /// Left to the host, e.g. to open `href` in a new tab.
    External { href: String },
    /// The identifier is not in the list.
    Unknown,
}

pub struct CatalogController {
    links: LinkTemplates,
    tags: TagIndex,
    categories: Vec<CategoryHeader>,
    entries: Vec<Entry>,
    lookup: HashMap<String, usize>,
    redirects: RedirectAllowList,
    selected: Option<usize>,
    filter_input: String,
    filter_query: String,
    location: Location,
    panel: PanelState,
    viewer: ViewerState,
    source_link: Option<SourceLink>,
}

impl CatalogController {
    /// Build the navigation list and apply the startup URL state.
    ///
    /// A hash naming a known file selects it and loads it into the viewer;
    /// any other hash is ignored. The `q` query parameter becomes the
    /// initial filter.
    pub fn init(manifest: &Manifest, tags: TagIndex, location: Location, links: LinkTemplates) -> Self {
        let mut categories = Vec::with_capacity(manifest.len());
        let mut entries = Vec::new();
        let mut lookup = HashMap::new();

        for (ci, (category, files)) in manifest.iter().enumerate() {
            let mut header = CategoryHeader {
                name: category.clone(),
                entries: Vec::with_capacity(files.len()),
                collapsed: false,
            };
            for file in files {
                let idx = entries.len();
                entries.push(Entry::new(file, ci));
                header.entries.push(idx);
                lookup.insert(file.clone(), idx);
            }
            categories.push(header);
        }

        let mut this = Self {
            links,
            tags,
            categories,
            entries,
            lookup,
            redirects: RedirectAllowList::from_manifest(manifest),
            selected: None,
            filter_input: String::new(),
            filter_query: String::new(),
            location,
            panel: PanelState::default(),
            viewer: ViewerState::default(),
            source_link: None,
        };

        if let Some(hash) = this.location.hash().map(str::to_string) {
            this.open_file(&hash);
        }

        this.filter_input = this.location.filter_query();
        if !this.filter_input.is_empty() {
            this.panel.search_focused = true;
        }
        if let Err(e) = this.update_filter() {
            warn!("ignoring startup filter: {e}");
        }
        this
    }

    /// Select `file` if the allow-list knows it and point the viewer at its
    /// document. Returns whether anything happened.
    pub fn open_file(&mut self, file: &str) -> bool {
        let Some(target) = self.redirects.resolve(file).map(str::to_string) else {
            debug!("ignoring navigation to unknown file {file:?}");
            return false;
        };
        self.select_file(file);
        self.viewer.src = Some(self.location.resolve_sibling(&target));
        true
    }

    /// Make `file` the single selected entry.
    ///
    /// Sets the URL hash, focuses the viewer, closes the overlay panel and
    /// reveals the source link. Unknown identifiers are ignored.
    pub fn select_file(&mut self, file: &str) {
        let Some(&idx) = self.lookup.get(file) else {
            debug!("select_file: no entry for {file:?}");
            return;
        };
        if let Some(prev) = self.selected.take() {
            self.entries[prev].selected = false;
        }
        self.entries[idx].selected = true;
        self.selected = Some(idx);

        self.location.set_hash(file);
        self.viewer.focused = true;
        self.panel.open = false;
        self.source_link = Some(SourceLink {
            href: self.links.source_url(file),
            title: format!("View source code for {} on GitHub", display_name(file)),
        });
        debug!("selected {file}");
    }

    /// Handle a click on the link of entry `file`.
    ///
    /// Only a plain primary click selects; modified or non-primary clicks are
    /// handed back to the host together with the link target.
    pub fn click_entry(&mut self, file: &str, click: LinkClick) -> ClickOutcome {
        let Some(target) = self.redirects.resolve(file).map(str::to_string) else {
            return ClickOutcome::Unknown;
        };
        let href = self.location.resolve_sibling(&target);
        if !click.is_plain_primary() {
            return ClickOutcome::External { href };
        }
        self.select_file(file);
        self.viewer.src = Some(href);
        ClickOutcome::Selected
    }

    /// Input event on the search box.
    pub fn set_filter_input(&mut self, raw: &str) -> Result<(), FilterError> {
        self.filter_input = raw.to_string();
        self.update_filter()
    }

    /// Re-apply the current filter input.
    ///
    /// The URL query is synchronized first. If the query is not a valid
    /// pattern the entries keep their previous state and the error is
    /// returned.
    pub fn update_filter(&mut self) -> Result<(), FilterError> {
        let query = normalize(&self.filter_input);
        self.location.replace_filter_query(&query);
        self.filter_query = query;

        let pattern = match FilterPattern::compile(&self.filter_query) {
            Ok(p) => p,
            Err(e) => {
                warn!("{e}");
                return Err(e);
            }
        };

        for entry in &mut self.entries {
            let m = pattern.apply(&entry.file, &entry.name, &self.tags);
            entry.hidden = !m.visible;
            entry.title = m.title;
        }
        self.layout_list();
        debug!(
            "filter {:?}: {} of {} entries visible",
            self.filter_query,
            self.visible_count(),
            self.entries.len()
        );
        Ok(())
    }

    /// Collapse every category whose entries are all hidden.
    fn layout_list(&mut self) {
        for header in &mut self.categories {
            header.collapsed = header.entries.iter().all(|&i| self.entries[i].hidden);
        }
    }

    pub fn focus_search(&mut self) {
        self.panel.search_focused = true;
    }

    pub fn blur_search(&mut self) {
        if self.filter_input.is_empty() {
            self.panel.search_focused = false;
        }
    }

    /// Clear the search box, show everything again and collapse the search
    /// affordance.
    pub fn exit_search(&mut self) {
        self.filter_input.clear();
        // The empty pattern always compiles.
        if let Err(e) = self.update_filter() {
            warn!("{e}");
        }
        self.panel.search_focused = false;
    }

    pub fn toggle_panel(&mut self) {
        self.panel.open = !self.panel.open;
    }

    pub fn toggle_previews(&mut self) {
        self.panel.minimal = !self.panel.minimal;
    }

    /// Apply the mobile viewer workaround for `user_agent`.
    pub fn adjust_viewport(&mut self, user_agent: &str, computed: ViewerSize) -> bool {
        let applied = self.viewer.adjust_for(user_agent, computed);
        if applied {
            debug!("pinned viewer to {}x{}", computed.width, computed.height);
        }
        applied
    }

    pub fn categories(&self) -> &[CategoryHeader] {
        &self.categories
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn entry(&self, file: &str) -> Option<&Entry> {
        self.lookup.get(file).map(|&i| &self.entries[i])
    }

    /// Entries of category `index`, in manifest order.
    pub fn category_entries(&self, index: usize) -> impl Iterator<Item = &Entry> + '_ {
        let entries = &self.entries;
        self.categories
            .get(index)
            .into_iter()
            .flat_map(move |h| h.entries.iter().map(move |&i| &entries[i]))
    }

    pub fn selected(&self) -> Option<&Entry> {
        self.selected.map(|i| &self.entries[i])
    }

    pub fn visible_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.hidden).count()
    }

    pub fn redirects(&self) -> &RedirectAllowList {
        &self.redirects
    }

    pub fn filter_input(&self) -> &str {
        &self.filter_input
    }

    /// Normalized filter last applied.
    pub fn filter_query(&self) -> &str {
        &self.filter_query
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn panel(&self) -> &PanelState {
        &self.panel
    }

    pub fn viewer(&self) -> &ViewerState {
        &self.viewer
    }

    pub fn source_link(&self) -> Option<&SourceLink> {
        self.source_link.as_ref()
    }

    pub fn links(&self) -> &LinkTemplates {
        &self.links
    }
}
