//! Shared fixtures for Polarwave integration tests.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use polarwave_engine::{FrameClock, PathFrame, Renderer};

/// Clock that only moves when told to, for deterministic elapsed times.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Mutex<Duration>,
}

impl ManualClock {
    /// Creates a clock stopped at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the clock by `delta`.
    pub fn advance(&self, delta: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += delta;
    }

    /// Jumps the clock to an absolute time.
    pub fn set(&self, to: Duration) {
        *self.now.lock().unwrap() = to;
    }

    /// Boxes a view of this clock for the engine, leaving the caller free to
    /// keep advancing it.
    pub fn boxed(self: &Arc<Self>) -> Box<dyn FrameClock> {
        Box::new(SharedClock(Arc::clone(self)))
    }
}

struct SharedClock(Arc<ManualClock>);

impl FrameClock for SharedClock {
    fn now(&self) -> Duration {
        self.0.now()
    }
}

impl FrameClock for ManualClock {
    fn now(&self) -> Duration {
        *self.now.lock().unwrap()
    }
}

/// Renderer that records every frame it is asked to draw.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    /// Frames in the order they were drawn, with the envelope scale used.
    pub drawn: Vec<(PathFrame, f64)>,
}

impl RecordingRenderer {
    /// Creates a renderer with nothing drawn.
    pub fn new() -> Self {
        Self::default()
    }

    /// The last drawn frame, if any.
    pub fn last_frame(&self) -> Option<&PathFrame> {
        self.drawn.last().map(|(frame, _)| frame)
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, frame: &PathFrame, envelope_scale: f64) {
        self.drawn.push((frame.clone(), envelope_scale));
    }
}
