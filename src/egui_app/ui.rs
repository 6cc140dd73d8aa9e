#![cfg(feature = "egui")]

use eframe::egui::{self, Color32, RichText, Sense};

use crate::controller::{ClickOutcome, LinkClick, MouseButton};

use super::state::GalleryApp;
use super::text::title_job;

const THUMBNAIL_WIDTH: f32 = 200.0;

/// Actions collected while drawing, applied once the frame's widgets are done.
#[derive(Default)]
struct Pending {
    filter_input: Option<String>,
    focus_search: bool,
    blur_search: bool,
    exit_search: bool,
    toggle_previews: bool,
    toggle_panel: bool,
    clicked: Option<(String, LinkClick)>,
}

pub fn update(app: &mut GalleryApp, ctx: &egui::Context) {
    let mut pending = Pending::default();

    egui::TopBottomPanel::top("top").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let menu = if app.catalog.panel().open { "✕" } else { "☰" };
            if ui.button(menu).clicked() {
                pending.toggle_panel = true;
            }
            ui.separator();
            ui.label(RichText::new(app.catalog.location().to_string()).monospace());
        });
    });

    let show_nav = app.catalog.panel().open || ctx.screen_rect().width() > 700.0;
    if show_nav {
        egui::SidePanel::left("nav")
            .resizable(true)
            .default_width(260.0)
            .show(ctx, |ui| nav_panel(app, ui, &mut pending));
    }

    egui::CentralPanel::default().show(ctx, |ui| viewer_panel(app, ui));

    // Apply staged actions after rendering to avoid borrowing `app` inside the closures
    if pending.toggle_panel {
        app.catalog.toggle_panel();
    }
    if pending.focus_search {
        app.catalog.focus_search();
    }
    if let Some(raw) = pending.filter_input {
        app.apply_filter_input(&raw);
    }
    if pending.blur_search {
        app.catalog.blur_search();
    }
    if pending.exit_search {
        app.exit_search();
    }
    if pending.toggle_previews {
        app.catalog.toggle_previews();
    }
    if let Some((file, click)) = pending.clicked {
        if let ClickOutcome::External { href } = app.catalog.click_entry(&file, click) {
            ctx.open_url(egui::OpenUrl::new_tab(app.file_uri(&href)));
        }
    }
}

fn nav_panel(app: &GalleryApp, ui: &mut egui::Ui, pending: &mut Pending) {
    let catalog = &app.catalog;
    ui.horizontal(|ui| {
        let mut buf = catalog.filter_input().to_string();
        let resp = ui.add(egui::TextEdit::singleline(&mut buf).hint_text("Search"));
        if resp.gained_focus() {
            pending.focus_search = true;
        }
        if resp.changed() {
            pending.filter_input = Some(buf);
        }
        if resp.lost_focus() {
            pending.blur_search = true;
        }
        if catalog.panel().search_focused && ui.button("✕").on_hover_text("Exit search").clicked() {
            pending.exit_search = true;
        }
    });
    if let Some(err) = &app.filter_error {
        ui.colored_label(Color32::RED, err.as_str());
    }
    ui.horizontal(|ui| {
        let label = if catalog.panel().minimal { "Show previews" } else { "Hide previews" };
        if ui.small_button(label).clicked() {
            pending.toggle_previews = true;
        }
        ui.label(format!(
            "{} / {}",
            catalog.visible_count(),
            catalog.entries().len()
        ));
    });
    ui.separator();

    let modifiers = ui.input(|i| i.modifiers);
    egui::ScrollArea::vertical().show(ui, |ui| {
        for (i, header) in catalog.categories().iter().enumerate() {
            if header.collapsed {
                continue;
            }
            ui.heading(header.name.as_str());
            for entry in catalog.category_entries(i).filter(|e| !e.hidden) {
                let frame = if entry.selected {
                    egui::Frame::group(ui.style()).fill(ui.visuals().selection.bg_fill)
                } else {
                    egui::Frame::group(ui.style())
                };
                let inner = frame.show(ui, |ui| {
                    if !catalog.panel().minimal {
                        let uri = app.file_uri(&catalog.links().screenshot(&entry.file));
                        ui.add(egui::Image::new(uri).max_width(THUMBNAIL_WIDTH));
                    }
                    ui.add(egui::Label::new(title_job(&entry.title)).sense(Sense::click()))
                });
                let resp = inner.response.interact(Sense::click()).union(inner.inner);
                let button = if resp.clicked() {
                    Some(MouseButton::Primary)
                } else if resp.middle_clicked() {
                    Some(MouseButton::Middle)
                } else if resp.secondary_clicked() {
                    Some(MouseButton::Secondary)
                } else {
                    None
                };
                if let Some(button) = button {
                    let click = LinkClick {
                        button,
                        ctrl: modifiers.ctrl,
                        alt: modifiers.alt,
                        meta: modifiers.mac_cmd,
                    };
                    pending.clicked = Some((entry.file.clone(), click));
                }
            }
        }
    });
}

fn viewer_panel(app: &GalleryApp, ui: &mut egui::Ui) {
    let catalog = &app.catalog;
    let Some(entry) = catalog.selected() else {
        ui.centered_and_justified(|ui| {
            ui.label("Select an example from the list");
        });
        return;
    };
    ui.heading(entry.name.as_str());
    ui.label(RichText::new(entry.file.as_str()).monospace());
    ui.separator();
    if let Some(src) = &catalog.viewer().src {
        let uri = app.file_uri(src);
        ui.horizontal(|ui| {
            ui.label("Document:");
            ui.hyperlink_to(src.as_str(), uri);
        });
    }
    if let Some(link) = catalog.source_link() {
        ui.hyperlink_to("View source", &link.href)
            .on_hover_text(link.title.as_str());
    }
    if !catalog.panel().minimal {
        ui.add_space(8.0);
        let uri = app.file_uri(&catalog.links().screenshot(&entry.file));
        ui.add(egui::Image::new(uri).max_width(ui.available_width()).max_height(ui.available_height()));
    }
}
