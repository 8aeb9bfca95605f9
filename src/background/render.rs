use super::frame::{Frame, FrameError};
use super::gradient::fallback_ops;
use super::surface::{cover_rect, Surface};

/// Where frames come from. Failures are values, never panics.
#[allow(async_fn_in_trait)]
pub trait FrameSource {
    async fn fetch_frame(&self) -> Result<Frame, FrameError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RenderState {
    /// One-way latch, set by the first successful paint of any kind.
    pub is_loaded: bool,
    /// Paint-clock timestamp (ms) of the last painted cycle, or of mount before
    /// anything has been painted.
    pub last_frame_timestamp: Option<f64>,
}

impl RenderState {
    /// Returns true only for the call that flips the latch.
    pub fn mark_loaded(&mut self) -> bool {
        !std::mem::replace(&mut self.is_loaded, true)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintKind {
    Frame,
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaintOutcome {
    pub kind: PaintKind,
    pub became_ready: bool,
}

/// Render loop bookkeeping, driven once per paint opportunity.
///
/// A cycle is `begin_cycle` → fetch and decode (async, outside the renderer) →
/// `paint`. Only one cycle is in flight at a time; paint opportunities that
/// arrive meanwhile are skipped rather than queued.
#[derive(Debug)]
pub struct Renderer {
    cadence_ms: f64,
    state: RenderState,
    in_flight: bool,
    torn_down: bool,
    failing: bool,
}

impl Renderer {
    pub fn new(cadence_ms: f64) -> Self {
        Self {
            cadence_ms,
            state: RenderState::default(),
            in_flight: false,
            torn_down: false,
            failing: false,
        }
    }

    pub fn state(&self) -> RenderState {
        self.state
    }

    pub fn is_loaded(&self) -> bool {
        self.state.is_loaded
    }

    /// Called on every paint opportunity with the paint clock in milliseconds.
    /// Returns true when a new frame should be requested now.
    ///
    /// The first call only records the mount time, so the first request goes
    /// out one cadence after mount.
    pub fn begin_cycle(&mut self, now: f64) -> bool {
        if self.torn_down || self.in_flight {
            return false;
        }
        let last = *self.state.last_frame_timestamp.get_or_insert(now);
        if now - last < self.cadence_ms {
            return false;
        }
        self.in_flight = true;
        true
    }

    /// Finish the cycle started at `now`, drawing the acquired image or, failing
    /// that, the fallback gradient. Returns `None` once torn down, in which case
    /// nothing is drawn.
    pub fn paint<S: Surface>(
        &mut self,
        surface: &S,
        acquired: Result<S::Image, FrameError>,
        now: f64,
    ) -> Option<PaintOutcome> {
        self.in_flight = false;
        if self.torn_down {
            return None;
        }

        let size = surface.size();
        let placed = acquired.and_then(|image| {
            cover_rect(size, S::image_size(&image))
                .map(|rect| (image, rect))
                .ok_or_else(|| FrameError::Decode(format!("nothing to draw at {size:?}")))
        });

        let kind = match placed {
            Ok((image, rect)) => {
                if self.failing {
                    log::info!("fluid frames available again");
                    self.failing = false;
                }
                surface.clear();
                surface.draw_image(&image, rect);
                PaintKind::Frame
            }
            Err(err) => {
                if self.failing {
                    log::debug!("still drawing fallback gradient: {err}");
                } else {
                    log::warn!("fluid frame unavailable, drawing fallback gradient: {err}");
                    self.failing = true;
                }
                for op in fallback_ops(now / 1000.0, size) {
                    surface.fill(&op);
                }
                PaintKind::Fallback
            }
        };

        self.state.last_frame_timestamp = Some(now);
        Some(PaintOutcome {
            kind,
            became_ready: self.state.mark_loaded(),
        })
    }

    /// Give up on the cycle started at `now` without painting. The next attempt
    /// waits a full cadence.
    pub fn abandon_cycle(&mut self, now: f64) {
        self.in_flight = false;
        self.state.last_frame_timestamp = Some(now);
    }

    /// Stop starting cycles and discard the result of any cycle still in flight.
    pub fn teardown(&mut self) {
        self.torn_down = true;
    }
}

/// Fetch one frame and decode it for `surface`.
pub async fn acquire_frame<F, S>(source: &F, surface: &S) -> Result<S::Image, FrameError>
where
    F: FrameSource,
    S: Surface,
{
    let frame = source.fetch_frame().await?;
    surface.decode(&frame).await
}
