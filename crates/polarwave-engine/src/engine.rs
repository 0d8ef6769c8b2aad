//! The animation driver tying store, worker, and renderer together.

use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

use polarwave_core::{RingMapper, WaveConfig};
use tracing::error;

use crate::clock::{FrameClock, MonotonicClock};
use crate::error::{EngineError, EngineResult};
use crate::frame::PathFrame;
use crate::store::StyleHandle;
use crate::worker::{self, EngineShared};

/// Consumes computed frames and draws them into a bounded viewport.
///
/// Implementations own viewport fitting - a uniform scale of
/// `min(viewport_width, viewport_height)` with vertical recentering - and the
/// stroke style correlated with each path's index. The engine checks
/// frame/style-count agreement before calling this, so a frame received here
/// always has one path per registered style.
pub trait Renderer {
    /// Draws one frame. `envelope_scale` stretches the wave band vertically.
    fn render(&mut self, frame: &PathFrame, envelope_scale: f64);
}

/// The animation engine.
///
/// Owns the wave store, the computation worker thread, and the frame
/// handoff slot outright; the worker is spawned at construction and joined
/// on [`WaveEngine::stop`] or drop. The embedder calls [`WaveEngine::tick`]
/// once per display refresh; registration calls may come from any thread
/// that can reach the engine.
pub struct WaveEngine {
    shared: Arc<EngineShared>,
    worker: Option<JoinHandle<()>>,
    current: Option<PathFrame>,
    envelope_scale: f64,
}

impl WaveEngine {
    /// Creates an engine with the default clock and ring geometry and spawns
    /// its worker thread.
    pub fn new() -> Self {
        Self::with_clock(Box::new(MonotonicClock::new()))
    }

    /// Creates an engine driven by a caller-provided clock.
    pub fn with_clock(clock: Box<dyn FrameClock>) -> Self {
        Self::with_parts(clock, RingMapper::default())
    }

    /// Creates an engine with a caller-provided clock and ring geometry.
    pub fn with_parts(clock: Box<dyn FrameClock>, mapper: RingMapper) -> Self {
        let shared = Arc::new(EngineShared::new(clock, mapper));
        let worker_shared = Arc::clone(&shared);
        let worker = std::thread::spawn(move || worker::run(worker_shared));
        Self {
            shared,
            worker: Some(worker),
            current: None,
            envelope_scale: 1.0,
        }
    }

    /// Registers a wave and returns its position in the store.
    ///
    /// The first registered wave is the base: it supplies the modulation
    /// envelope, draws no stroke, and its style handle is ignored. A
    /// sub-wave at position `p` produces the path carrying index `p - 1`.
    pub fn register(&self, config: WaveConfig, style: StyleHandle) -> usize {
        self.shared.store.register(config, style)
    }

    /// Removes every registered wave.
    ///
    /// An already-computed frame stays in the slot; consuming it after a
    /// clear fails the frame/style-count check, by design.
    pub fn clear(&self) {
        self.shared.store.clear();
    }

    /// Sets the vertical scale applied to the wave band at render time.
    pub fn set_envelope_scale(&mut self, scale: f64) {
        self.envelope_scale = scale;
    }

    /// The current envelope scale factor.
    pub fn envelope_scale(&self) -> f64 {
        self.envelope_scale
    }

    /// Starts animation timing from the clock's current instant.
    pub fn start(&self) {
        self.shared.restart_origin();
    }

    /// Starts animation timing from an explicit origin on the clock's
    /// timeline.
    pub fn start_at(&self, origin: Duration) {
        self.shared.set_origin(origin);
    }

    /// Stops the computation worker and joins it.
    ///
    /// Idempotent and terminal: a stopped engine ignores further recompute
    /// requests. Any frame already in the slot stays consumable.
    pub fn stop(&mut self) {
        self.shared.gate.stop();
        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                error!("computation worker panicked");
            }
        }
    }

    /// Posts a coalesced recompute request. Never blocks.
    pub fn request_frame(&self) {
        self.shared.gate.request();
    }

    /// One display-refresh step: request a recompute, then draw whatever
    /// frame is current.
    pub fn tick<R: Renderer>(&mut self, renderer: &mut R) -> EngineResult<bool> {
        self.request_frame();
        self.draw(renderer)
    }

    /// Draws the newest available frame, or re-draws the previous one when
    /// nothing new has arrived yet. Returns whether anything was drawn.
    ///
    /// A frame whose path count disagrees with the registered style count is
    /// dropped and surfaced as [`EngineError::StyleCountMismatch`]; the
    /// previously drawn frame is kept.
    pub fn draw<R: Renderer>(&mut self, renderer: &mut R) -> EngineResult<bool> {
        if let Some(frame) = self.shared.slot.try_take() {
            let styles = self.shared.store.style_count();
            if frame.len() != styles {
                return Err(EngineError::StyleCountMismatch {
                    paths: frame.len(),
                    styles,
                });
            }
            self.current = Some(frame);
        }

        match &self.current {
            Some(frame) => {
                renderer.render(frame, self.envelope_scale);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Runs one computation synchronously on the caller's thread and
    /// publishes the result, for non-animating preview contexts.
    ///
    /// Returns whether a frame was published; fewer than two registered
    /// waves publish nothing.
    pub fn compute_once(&self) -> EngineResult<bool> {
        match worker::compute_frame(&self.shared)? {
            Some(frame) => {
                self.shared.slot.publish(frame);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Drains the last defect recorded by the worker, if any.
    ///
    /// Worker-side contract violations drop the frame and land here instead
    /// of killing the worker loop.
    pub fn take_worker_error(&self) -> Option<EngineError> {
        self.shared.take_defect()
    }
}

impl Default for WaveEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for WaveEngine {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Default)]
    struct CountingRenderer {
        frames: Vec<PathFrame>,
        scales: Vec<f64>,
    }

    impl Renderer for CountingRenderer {
        fn render(&mut self, frame: &PathFrame, envelope_scale: f64) {
            self.frames.push(frame.clone());
            self.scales.push(envelope_scale);
        }
    }

    fn base() -> WaveConfig {
        WaveConfig::stationary(0.5, 0.5)
    }

    #[test]
    fn test_draw_before_any_computation_draws_nothing() {
        let mut engine = WaveEngine::new();
        let mut renderer = CountingRenderer::default();
        assert_eq!(engine.draw(&mut renderer).unwrap(), false);
        assert!(renderer.frames.is_empty());
    }

    #[test]
    fn test_compute_once_with_too_few_waves_publishes_nothing() {
        let engine = WaveEngine::new();
        assert_eq!(engine.compute_once().unwrap(), false);
        engine.register(base(), StyleHandle(0));
        assert_eq!(engine.compute_once().unwrap(), false);
    }

    #[test]
    fn test_compute_once_then_draw() {
        let mut engine = WaveEngine::new();
        engine.register(base(), StyleHandle(0));
        engine.register(WaveConfig::stationary(0.5, 2.5), StyleHandle(7));

        assert_eq!(engine.compute_once().unwrap(), true);

        let mut renderer = CountingRenderer::default();
        assert_eq!(engine.draw(&mut renderer).unwrap(), true);
        assert_eq!(renderer.frames.len(), 1);
        assert_eq!(renderer.frames[0].len(), 1);
        assert_eq!(renderer.frames[0].paths()[0].style, StyleHandle(7));
    }

    #[test]
    fn test_draw_keeps_last_frame_when_slot_is_empty() {
        let mut engine = WaveEngine::new();
        engine.register(base(), StyleHandle(0));
        engine.register(WaveConfig::stationary(0.5, 2.5), StyleHandle(1));
        engine.compute_once().unwrap();

        let mut renderer = CountingRenderer::default();
        engine.draw(&mut renderer).unwrap();
        // Slot is now empty; the same frame is re-drawn.
        assert_eq!(engine.draw(&mut renderer).unwrap(), true);
        assert_eq!(renderer.frames.len(), 2);
        assert_eq!(renderer.frames[0], renderer.frames[1]);
    }

    #[test]
    fn test_stale_frame_after_clear_is_a_loud_mismatch() {
        let mut engine = WaveEngine::new();
        engine.register(base(), StyleHandle(0));
        engine.register(WaveConfig::stationary(0.5, 2.5), StyleHandle(1));
        engine.compute_once().unwrap();

        engine.clear();

        let mut renderer = CountingRenderer::default();
        let err = engine.draw(&mut renderer).unwrap_err();
        assert_eq!(err, EngineError::StyleCountMismatch { paths: 1, styles: 0 });
        assert!(renderer.frames.is_empty());
    }

    #[test]
    fn test_envelope_scale_reaches_the_renderer() {
        let mut engine = WaveEngine::new();
        engine.register(base(), StyleHandle(0));
        engine.register(WaveConfig::stationary(0.5, 2.5), StyleHandle(1));
        engine.set_envelope_scale(0.6);
        engine.compute_once().unwrap();

        let mut renderer = CountingRenderer::default();
        engine.draw(&mut renderer).unwrap();
        assert_eq!(renderer.scales, vec![0.6]);
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut engine = WaveEngine::new();
        engine.stop();
        engine.stop();
    }
}
