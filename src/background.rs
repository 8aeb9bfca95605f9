//! Animated background: fluid frames streamed from the backend, painted onto a
//! canvas, with a locally synthesized gradient whenever no frame is available.
//!
//! Everything in here is independent of the browser. The canvas binding lives in
//! `app::background` and plugs into [`Surface`] and [`FrameSource`].
mod frame;
mod gradient;
mod render;
mod surface;

pub use frame::{Frame, FrameError, FrameResponse};
pub use gradient::{fallback_gradient, fallback_ops, ALPHA_RANGE};
pub use render::{acquire_frame, FrameSource, PaintKind, PaintOutcome, RenderState, Renderer};
pub use surface::{
    cover_rect, ColorStop, DrawOp, LinearGradient, Paint, Point, Rect, Rgba, Size, Surface,
};

/// Time between frame requests. 150ms is roughly 6.7 frames per second.
pub const FRAME_CADENCE_MS: f64 = 150.0;
