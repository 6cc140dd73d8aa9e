//! Projections of the controller state: a serializable view snapshot and the
//! HTML navigation list.

use html_escape::{encode_double_quoted_attribute, encode_text};
use serde::Serialize;

use crate::controller::{CatalogController, PanelState, SourceLink};
use crate::model::{Entry, Title};
use crate::viewport::ViewerState;

#[derive(Debug, Serialize)]
pub struct CatalogView<'a> {
    pub url: String,
    pub filter: FilterView<'a>,
    pub selected: Option<&'a str>,
    pub panel: &'a PanelState,
    pub viewer: &'a ViewerState,
    pub source_link: Option<&'a SourceLink>,
    pub categories: Vec<CategoryView<'a>>,
}

#[derive(Debug, Serialize)]
pub struct FilterView<'a> {
    pub input: &'a str,
    pub query: &'a str,
    pub visible: usize,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct CategoryView<'a> {
    pub name: &'a str,
    pub collapsed: bool,
    pub entries: Vec<EntryView<'a>>,
}

#[derive(Debug, Serialize)]
pub struct EntryView<'a> {
    pub file: &'a str,
    pub title: &'a Title,
    pub title_html: String,
    pub href: String,
    pub thumbnail: String,
    pub hidden: bool,
    pub selected: bool,
}

/// Snapshot of everything a front-end needs to draw the catalog.
pub fn catalog_view(c: &CatalogController) -> CatalogView<'_> {
    let categories = c
        .categories()
        .iter()
        .enumerate()
        .map(|(i, header)| CategoryView {
            name: &header.name,
            collapsed: header.collapsed,
            entries: c.category_entries(i).map(|e| entry_view(c, e)).collect(),
        })
        .collect();
    CatalogView {
        url: c.location().to_string(),
        filter: FilterView {
            input: c.filter_input(),
            query: c.filter_query(),
            visible: c.visible_count(),
            total: c.entries().len(),
        },
        selected: c.selected().map(|e| e.file.as_str()),
        panel: c.panel(),
        viewer: c.viewer(),
        source_link: c.source_link(),
        categories,
    }
}

fn entry_view<'a>(c: &'a CatalogController, e: &'a Entry) -> EntryView<'a> {
    EntryView {
        file: &e.file,
        title: &e.title,
        title_html: title_html(&e.title),
        href: format!("{}.html", e.file),
        thumbnail: c.links().screenshot(&e.file),
        hidden: e.hidden,
        selected: e.selected,
    }
}

/// Escaped title with the emphasized run wrapped in `<b>`.
pub fn title_html(title: &Title) -> String {
    let mut out = String::with_capacity(title.text.len() + 7);
    for (text, emphasized) in title.segments() {
        if emphasized {
            out.push_str("<b>");
            out.push_str(&encode_text(text));
            out.push_str("</b>");
        } else {
            out.push_str(&encode_text(text));
        }
    }
    out
}

/// Render the navigation list: one `<h2>` per category followed by its cards.
/// Hidden entries and collapsed headers carry the `hidden` class.
pub fn nav_html(c: &CatalogController) -> String {
    let mut out = String::new();
    out.push_str("<div>\n");
    for (i, header) in c.categories().iter().enumerate() {
        let name = encode_text(&header.name);
        let attr = encode_double_quoted_attribute(&header.name);
        let class = if header.collapsed { " class=\"hidden\"" } else { "" };
        out.push_str(&format!("<h2 data-category=\"{attr}\"{class}>{name}</h2>\n"));
        for e in c.category_entries(i) {
            write_card(&mut out, c, e);
        }
    }
    out.push_str("</div>\n");
    out
}

fn write_card(out: &mut String, c: &CatalogController, e: &Entry) {
    let mut classes = vec!["card"];
    if e.selected {
        classes.push("selected");
    }
    if e.hidden {
        classes.push("hidden");
    }
    let file = encode_double_quoted_attribute(&e.file);
    let thumb = encode_double_quoted_attribute(&c.links().screenshot(&e.file)).into_owned();
    out.push_str(&format!(
        "<div class=\"{}\">\n\t<a href=\"{file}.html\" target=\"viewer\">\n\t\t<div class=\"cover\">\n\t\t\t<img src=\"{thumb}\" loading=\"lazy\" width=\"400\" />\n\t\t</div>\n\t\t<div class=\"title\">{}</div>\n\t</a>\n</div>\n",
        classes.join(" "),
        title_html(&e.title),
    ));
}
