//! Scroll progress: how far down the document the viewport has travelled.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Normalize a vertical scroll offset to `[0, 1]`.
///
/// `0` at the top, `1` once the bottom of the document is in view. Documents
/// that fit inside the viewport, and non-finite inputs, report `0`.
#[must_use]
pub fn progress(offset: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if !offset.is_finite() || !scrollable.is_finite() || scrollable <= 0.0 {
        return 0.0;
    }
    (offset / scrollable).clamp(0.0, 1.0)
}

/// Latest scroll progress, updated from scroll events.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollTracker {
    progress: f64,
}

impl ScrollTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new scroll sample and return the resulting progress.
    pub fn update(&mut self, offset: f64, document_height: f64, viewport_height: f64) -> f64 {
        self.progress = progress(offset, document_height, viewport_height);
        self.progress
    }

    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress
    }
}
