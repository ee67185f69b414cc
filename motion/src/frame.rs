//! Per-frame motion snapshot and its fan-out to decorative layers.

#[cfg(test)]
#[path = "frame_test.rs"]
mod frame_test;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_LAYER_TRAVEL_PX;
use crate::pointer::{Pointer, PointerTracker};
use crate::scroll::ScrollTracker;

/// Everything a layer needs to position itself for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MotionFrame {
    /// Scroll progress in `[0, 1]`.
    pub scroll: f64,
    /// Smoothed pointer in `[-1, 1]` per axis.
    pub pointer: Pointer,
}

/// Translation applied to a layer, in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

/// A decorative layer at some parallax depth.
///
/// Depth `0` is pinned to the page; larger depths drift further with the
/// pointer and rise faster while scrolling. Negative depths move against the
/// pointer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub depth: f64,
    pub travel_px: f64,
}

impl Layer {
    #[must_use]
    pub fn new(depth: f64) -> Self {
        Self { depth, travel_px: DEFAULT_LAYER_TRAVEL_PX }
    }

    /// Screen-space offset for this layer in the given frame.
    #[must_use]
    pub fn offset(&self, frame: &MotionFrame) -> Offset {
        let reach = self.depth * self.travel_px;
        if !reach.is_finite() {
            return Offset::default();
        }
        Offset {
            x: frame.pointer.x * reach,
            y: -(frame.pointer.y + frame.scroll) * reach,
        }
    }
}

/// Offsets for every layer, in the same order as `layers`.
#[must_use]
pub fn fan_out(frame: &MotionFrame, layers: &[Layer]) -> Vec<Offset> {
    layers.iter().map(|layer| layer.offset(frame)).collect()
}

/// Input trackers sampled together once per animation frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MotionState {
    pub scroll: ScrollTracker,
    pub pointer: PointerTracker,
}

impl MotionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the eased pointer and snapshot both inputs.
    pub fn frame(&mut self) -> MotionFrame {
        MotionFrame { scroll: self.scroll.progress(), pointer: self.pointer.tick() }
    }
}
