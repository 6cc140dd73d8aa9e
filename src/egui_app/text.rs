#![cfg(feature = "egui")]

use eframe::egui::{self, Color32, text::LayoutJob};

use crate::model::Title;

/// Build a LayoutJob for an entry title, highlighting its emphasized run.
pub fn title_job(title: &Title) -> LayoutJob {
    let mut job = LayoutJob::default();
    for (text, emphasized) in title.segments() {
        let mut fmt = egui::TextFormat::default();
        if emphasized {
            fmt.background = Color32::YELLOW;
            fmt.color = Color32::BLACK;
        }
        job.append(text, 0.0, fmt);
    }
    job
}
