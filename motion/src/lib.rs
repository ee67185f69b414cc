//! Per-frame motion state for the brochure site's decorative layers.
//!
//! Pure computation with no platform bindings. The page host feeds it raw
//! scroll and cursor samples once per animation frame; they are reduced to a
//! single [`frame::MotionFrame`] and that snapshot is handed to every visual
//! layer as plain data. Layers never read input themselves.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`scroll`] | Normalized 0..1 scroll progress |
//! | [`pointer`] | Normalized -1..1 cursor position with easing |
//! | [`frame`] | Per-frame snapshot and parallax fan-out to layers |
//! | [`consts`] | Shared numeric constants |

pub mod consts;
pub mod frame;
pub mod pointer;
pub mod scroll;
