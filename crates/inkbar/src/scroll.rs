//! Horizontal scroll region backing the toolbar.
//!
//! This module provides [`ScrollRegion`], the one-dimensional scroll model
//! the toolbar lays its buttons into. The toolbar keeps the region's content
//! width equal to the summed button widths, so configurations wider than the
//! visible frame become scrollable and narrower ones do not.

use inkbar_core::Signal;
use tracing::trace;

use inkbar_core::logging::targets;

use crate::types::Size;

/// A horizontally scrollable viewport over toolbar content.
///
/// The scroll offset is always clamped to the valid range; content never
/// scrolls past its edges.
pub struct ScrollRegion {
    viewport: Size,
    content_width: f32,
    scroll_x: f32,

    /// Emitted with the new offset whenever the scroll position changes.
    pub scrolled: Signal<f32>,
}

impl ScrollRegion {
    /// Create an empty region with a zero-sized viewport.
    pub fn new() -> Self {
        Self {
            viewport: Size::ZERO,
            content_width: 0.0,
            scroll_x: 0.0,
            scrolled: Signal::new(),
        }
    }

    /// The visible frame of the region.
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Resize the visible frame, re-clamping the offset against the new
    /// scrollable range.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
        self.scroll_to(self.scroll_x);
    }

    /// Total width of the scrollable content.
    pub fn content_width(&self) -> f32 {
        self.content_width
    }

    /// Set the content width, re-clamping the offset.
    pub fn set_content_width(&mut self, width: f32) {
        self.content_width = width.max(0.0);
        trace!(
            target: targets::LAYOUT,
            content_width = self.content_width,
            "scroll content resized"
        );
        self.scroll_to(self.scroll_x);
    }

    /// Largest valid scroll offset. Zero when content fits the viewport.
    pub fn max_scroll(&self) -> f32 {
        (self.content_width - self.viewport.width).max(0.0)
    }

    /// Whether any content lies outside the viewport.
    pub fn is_scrollable(&self) -> bool {
        self.max_scroll() > 0.0
    }

    /// Current scroll offset.
    pub fn scroll_x(&self) -> f32 {
        self.scroll_x
    }

    /// Scroll to `x`, clamped to `0.0..=max_scroll()`. Emits
    /// [`scrolled`](Self::scrolled) only when the clamped offset changes.
    pub fn scroll_to(&mut self, x: f32) {
        let clamped = x.clamp(0.0, self.max_scroll());
        if clamped == self.scroll_x {
            return;
        }
        self.scroll_x = clamped;
        self.scrolled.emit(clamped);
    }

    /// Scroll by a relative delta.
    pub fn scroll_by(&mut self, delta: f32) {
        self.scroll_to(self.scroll_x + delta);
    }
}

impl Default for ScrollRegion {
    fn default() -> Self {
        Self::new()
    }
}

static_assertions::assert_impl_all!(ScrollRegion: Send, Sync);

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;

    fn region(viewport_width: f32, content_width: f32) -> ScrollRegion {
        let mut region = ScrollRegion::new();
        region.set_viewport(Size::new(viewport_width, 44.0));
        region.set_content_width(content_width);
        region
    }

    #[test]
    fn test_fitting_content_is_not_scrollable() {
        let region = region(200.0, 80.0);
        assert!(!region.is_scrollable());
        assert_eq!(region.max_scroll(), 0.0);
    }

    #[test]
    fn test_overflowing_content_is_scrollable() {
        let region = region(320.0, 800.0);
        assert!(region.is_scrollable());
        assert_eq!(region.max_scroll(), 480.0);
    }

    #[test]
    fn test_scroll_clamps_to_range() {
        let mut region = region(320.0, 800.0);
        region.scroll_to(10_000.0);
        assert_eq!(region.scroll_x(), 480.0);
        region.scroll_to(-50.0);
        assert_eq!(region.scroll_x(), 0.0);
    }

    #[test]
    fn test_shrinking_content_reclamps_offset() {
        let mut region = region(320.0, 800.0);
        region.scroll_to(480.0);
        region.set_content_width(400.0);
        assert_eq!(region.scroll_x(), 80.0);
    }

    #[test]
    fn test_scrolled_emits_only_on_change() {
        let mut region = region(320.0, 800.0);
        let notifications = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&notifications);
        region.scrolled.connect(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        region.scroll_to(100.0);
        region.scroll_to(100.0);
        region.scroll_to(0.0);
        assert_eq!(notifications.load(Ordering::SeqCst), 2);
    }
}
