//! Frame gating
//!
//! The scheduler is a non-blocking poll: call [`FrameScheduler::tick`] as
//! often as the main loop spins and it only renders once the effect interval
//! has passed. The caller owns the clock and any sleeping between polls.

use embassy_time::Instant;

use crate::random::RandomSource;
use crate::{DisplaySink, Renderer};

/// Ticks a renderer and pushes every rendered frame to a display sink
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(renderer, sink);
/// scheduler.begin();
///
/// loop {
///     let now = Instant::from_millis(get_current_time_ms());
///     scheduler.tick(now);
/// }
/// ```
pub struct FrameScheduler<S: DisplaySink, R: RandomSource, const N: usize> {
    sink: S,
    renderer: Renderer<R, N>,
}

impl<S: DisplaySink, R: RandomSource, const N: usize> FrameScheduler<S, R, N> {
    pub const fn new(renderer: Renderer<R, N>, sink: S) -> Self {
        Self { sink, renderer }
    }

    /// Push the current buffer to the sink without rendering
    pub fn begin(&mut self) {
        self.renderer.write_to(&mut self.sink);
    }

    /// Render a frame if one is due at `now`
    ///
    /// Returns true if a frame was rendered and written to the sink.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.tick_with(now, false)
    }

    /// Render a frame if one is due at `now`, or unconditionally if `force`
    pub fn tick_with(&mut self, now: Instant, force: bool) -> bool {
        if !force && !self.renderer.is_due(now) {
            return false;
        }

        self.renderer.mark(now);
        self.renderer.render();
        self.renderer.write_to(&mut self.sink);
        true
    }

    /// Turn the whole strip off and push it to the sink immediately
    pub fn clear(&mut self) {
        self.renderer.clear();
        self.renderer.write_to(&mut self.sink);
    }

    /// Time at which the next frame becomes due
    pub fn next_deadline(&self) -> Instant {
        self.renderer.state().next_deadline()
    }

    pub const fn renderer(&self) -> &Renderer<R, N> {
        &self.renderer
    }

    pub const fn renderer_mut(&mut self) -> &mut Renderer<R, N> {
        &mut self.renderer
    }

    pub const fn sink(&self) -> &S {
        &self.sink
    }

    pub const fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Take the renderer and sink back
    pub fn into_parts(self) -> (Renderer<R, N>, S) {
        (self.renderer, self.sink)
    }
}
