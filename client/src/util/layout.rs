//! Viewport-width breakpoint for the sidebar/content layout.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use crate::config::{MOBILE_BREAKPOINT_PX, SIDEBAR_WIDTH_PX};

/// How the sidebar sits relative to the main content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayoutMode {
    /// Fixed sidebar on the left; content offset by its width.
    #[default]
    Docked,
    /// Sidebar flows above content at full width.
    Stacked,
}

impl LayoutMode {
    pub fn for_width(width_px: f64) -> Self {
        if width_px <= MOBILE_BREAKPOINT_PX { Self::Stacked } else { Self::Docked }
    }

    pub fn sidebar_position(self) -> &'static str {
        match self {
            Self::Docked => "fixed",
            Self::Stacked => "relative",
        }
    }

    pub fn sidebar_width(self) -> String {
        match self {
            Self::Docked => format!("{SIDEBAR_WIDTH_PX}px"),
            Self::Stacked => "100%".to_owned(),
        }
    }

    pub fn content_margin_left(self) -> String {
        match self {
            Self::Docked => format!("{SIDEBAR_WIDTH_PX}px"),
            Self::Stacked => "0".to_owned(),
        }
    }

    /// Inline style for the `.sidebar` element.
    pub fn sidebar_style(self) -> String {
        format!("position: {}; width: {};", self.sidebar_position(), self.sidebar_width())
    }

    /// Inline style for the `.main-content` element.
    pub fn content_style(self) -> String {
        format!("margin-left: {};", self.content_margin_left())
    }
}

/// Current `window.innerWidth`, if a browser window is available.
pub fn viewport_width() -> Option<f64> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()?.inner_width().ok()?.as_f64()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
