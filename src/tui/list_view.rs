//! Scroll state of the rendered option list.
//!
//! `ListView` is the terminal implementation of [`ListHost`]: offsets are in
//! rows, and the viewport height comes from the last layout pass.

use crate::log;
use crate::scroll::{ListHost, clamp_offset};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListView {
    offset: f32,
    viewport: f32,
    laid_out: bool,
}

impl ListView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Layout callback: record the height of the list container.
    ///
    /// Returns true on the first layout and whenever the height changes.
    pub fn on_layout(&mut self, height: f32) -> bool {
        if self.laid_out && self.viewport == height {
            return false;
        }
        self.laid_out = true;
        self.viewport = height;
        log::log_event(&format!("list layout: viewport {} rows", height));
        true
    }

    /// Requested offset, which may exceed the content until clamped.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Offset to render with for `content_height` of rows.
    pub fn visible_offset(&self, content_height: f32) -> f32 {
        clamp_offset(self.offset, content_height, self.viewport)
    }

    /// Scroll by `delta` rows, staying within the content.
    pub fn scroll_by(&mut self, delta: f32, content_height: f32) {
        let current = self.visible_offset(content_height);
        self.offset = clamp_offset(current + delta, content_height, self.viewport);
    }

    /// Scroll the least amount needed to show rows `top..bottom`.
    pub fn reveal(&mut self, top: f32, bottom: f32, content_height: f32) {
        let current = self.visible_offset(content_height);
        let target = if top < current {
            top
        } else if bottom > current + self.viewport {
            bottom - self.viewport
        } else {
            current
        };
        self.offset = clamp_offset(target, content_height, self.viewport);
    }
}

impl ListHost for ListView {
    fn scroll_to(&mut self, offset: f32) {
        self.offset = offset.max(0.0);
    }

    fn viewport_height(&self) -> f32 {
        self.viewport
    }
}
