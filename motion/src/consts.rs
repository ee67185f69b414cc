//! Shared numeric constants for the motion crate.

// ── Pointer ─────────────────────────────────────────────────────

/// Fraction of the remaining distance the smoothed pointer covers per frame.
pub const DEFAULT_POINTER_SMOOTHING: f64 = 0.1;

/// Below this distance the smoothed pointer snaps onto its target.
pub const POINTER_SNAP_EPSILON: f64 = 1e-4;

// ── Parallax ────────────────────────────────────────────────────

/// Maximum layer travel in CSS pixels at depth 1.0.
pub const DEFAULT_LAYER_TRAVEL_PX: f64 = 40.0;
