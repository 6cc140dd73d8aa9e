//! Categorized example gallery browser.
//!
//! This crate loads a gallery manifest (`files.json`) and tag index
//! (`tags.json`), builds a navigation list grouped by category and drives it
//! through a [`controller::CatalogController`]: live regex filtering kept in
//! sync with the URL query, and hash deep-links checked against an allow-list
//! before anything is opened.
//!
//! The binary `gallerist` replays a URL and user actions against a gallery
//! and prints the resulting view as JSON or HTML.

pub mod config;
pub mod controller;
pub mod filter;
pub mod loader;
pub mod location;
pub mod model;
pub mod redirect;
pub mod render;
pub mod source;
pub mod viewport;

// Optional desktop front-end lives behind the `egui` feature flag and is used
// by demos/gallery_viewer.rs.
#[cfg(feature = "egui")]
pub mod egui_app;
