//! Pointer position normalized to the viewport, with per-frame easing.
//!
//! Raw cursor events arrive far more often than frames are drawn and jump
//! abruptly; `PointerTracker` keeps the latest raw sample as a target and
//! moves a smoothed position toward it once per frame.

#[cfg(test)]
#[path = "pointer_test.rs"]
mod pointer_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_POINTER_SMOOTHING, POINTER_SNAP_EPSILON};

/// Pointer position with each axis in `[-1, 1]`.
///
/// `(0, 0)` is the viewport centre, `x = 1` the right edge and `y = 1` the
/// top edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

impl Pointer {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

fn axis(value: f64, extent: f64) -> f64 {
    if !value.is_finite() || !extent.is_finite() || extent <= 0.0 {
        return 0.0;
    }
    (value / extent * 2.0 - 1.0).clamp(-1.0, 1.0)
}

/// Convert a client-space cursor position to a [`Pointer`].
///
/// Degenerate viewports and non-finite coordinates map to the centre.
#[must_use]
pub fn normalize(client_x: f64, client_y: f64, width: f64, height: f64) -> Pointer {
    Pointer { x: axis(client_x, width), y: -axis(client_y, height) }
}

/// Eased pointer: `target` follows raw input, `current` trails it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerTracker {
    target: Pointer,
    current: Pointer,
    smoothing: f64,
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new(DEFAULT_POINTER_SMOOTHING)
    }
}

impl PointerTracker {
    /// `smoothing` is the fraction of the remaining distance covered per
    /// tick. Values outside `(0, 1]` fall back to the default.
    #[must_use]
    pub fn new(smoothing: f64) -> Self {
        let smoothing = if smoothing > 0.0 && smoothing <= 1.0 { smoothing } else { DEFAULT_POINTER_SMOOTHING };
        Self { target: Pointer::default(), current: Pointer::default(), smoothing }
    }

    /// Record a raw cursor sample.
    pub fn aim(&mut self, client_x: f64, client_y: f64, width: f64, height: f64) {
        self.target = normalize(client_x, client_y, width, height);
    }

    /// Advance one frame and return the smoothed position.
    pub fn tick(&mut self) -> Pointer {
        self.current = Pointer {
            x: ease(self.current.x, self.target.x, self.smoothing),
            y: ease(self.current.y, self.target.y, self.smoothing),
        };
        self.current
    }

    #[must_use]
    pub fn target(&self) -> Pointer {
        self.target
    }

    #[must_use]
    pub fn current(&self) -> Pointer {
        self.current
    }
}

fn ease(current: f64, target: f64, smoothing: f64) -> f64 {
    let delta = target - current;
    if delta.abs() < POINTER_SNAP_EPSILON {
        target
    } else {
        current + delta * smoothing
    }
}
