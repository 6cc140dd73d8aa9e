//! Egui-based desktop front-end for a gallery (feature = "egui").
//!
//! The app owns a [`CatalogController`](crate::controller::CatalogController)
//! and renders it every frame; widget events are fed back as controller calls.

#![cfg(feature = "egui")]

mod state;
mod text;
mod ui;

pub use state::GalleryApp;
pub use text::title_job;
pub use ui::update;
