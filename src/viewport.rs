//! Viewer sizing workaround for mobile Safari, which auto-resizes embedded
//! documents to their content.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static IOS_DEVICE: Lazy<Option<Regex>> = Lazy::new(|| Regex::new("iPad|iPhone|iPod").ok());

/// Whether `user_agent` belongs to a device with the auto-resize defect.
pub fn needs_fixed_viewer(user_agent: &str) -> bool {
    IOS_DEVICE
        .as_ref()
        .is_some_and(|re| re.is_match(user_agent))
}

/// Computed pixel size of the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewerSize {
    pub width: f32,
    pub height: f32,
}

/// State of the embedded example viewer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewerState {
    /// Resolved document shown in the viewer; `None` keeps the default page.
    pub src: Option<String>,
    pub focused: bool,
    /// Pinned size, set only by the mobile workaround.
    pub fixed_size: Option<ViewerSize>,
    pub scrolling: bool,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self {
            src: None,
            focused: false,
            fixed_size: None,
            scrolling: true,
        }
    }
}

impl ViewerState {
    /// Pin the viewer to `computed` and disable scrolling when `user_agent`
    /// is affected. Returns whether the workaround was applied.
    pub fn adjust_for(&mut self, user_agent: &str, computed: ViewerSize) -> bool {
        if !needs_fixed_viewer(user_agent) {
            return false;
        }
        self.fixed_size = Some(computed);
        self.scrolling = false;
        true
    }
}
