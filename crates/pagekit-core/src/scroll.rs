//! Scroll-derived state: back-to-top visibility, reading progress and anchor
//! destinations. All of it is recomputed from the current metrics on every
//! event; nothing is carried between events.

use crate::surface::Surface;

/// Class that reveals the back-to-top button.
pub const BACK_TO_TOP_VISIBLE_CLASS: &str = "visible";

/// Whether the back-to-top button should show at `offset`.
pub fn back_to_top_visible(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// The back-to-top button.
#[derive(Debug)]
pub struct BackToTop<E> {
    button: E,
    threshold: f64,
}

impl<E: Surface> BackToTop<E> {
    pub fn new(button: E, threshold: f64) -> Self {
        Self { button, threshold }
    }

    /// Update visibility for the current scroll offset.
    pub fn on_scroll(&self, offset: f64) -> bool {
        let visible = back_to_top_visible(offset, self.threshold);
        self.button.set_class(BACK_TO_TOP_VISIBLE_CLASS, visible);
        visible
    }
}

/// Percentage of the scrollable range covered at `scrolled`, in `[0, 100]`.
///
/// A document without scrollable overflow reads as 0%.
pub fn reading_progress(scrolled: f64, full_height: f64, viewport_height: f64) -> f64 {
    let range = full_height - viewport_height;
    if !range.is_finite() || range <= 0.0 || !scrolled.is_finite() {
        return 0.0;
    }
    (scrolled / range * 100.0).clamp(0.0, 100.0)
}

/// Id targeted by a same-page link, `None` for bare `#` and other links.
pub fn anchor_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Document offset to scroll to so the target clears the fixed header.
///
/// `element_top` is relative to the viewport, as from
/// `getBoundingClientRect`.
pub fn anchor_destination(element_top: f64, page_offset: f64, header_offset: f64) -> f64 {
    (element_top + page_offset - header_offset).max(0.0)
}
