//! Background computation worker.
//!
//! The worker owns no state of its own; everything it touches lives in
//! [`EngineShared`], the bundle the driver and the worker thread both hold an
//! `Arc` to. It blocks in the request gate while idle, never mid-computation,
//! and no lock is held across the geometry work: the store snapshot and the
//! slot publish are the only synchronized sections.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use polarwave_core::{
    build_spline, default_point_count, modulate, sample_sine, RingMapper,
};
use tracing::{debug, warn};

use crate::clock::FrameClock;
use crate::error::{EngineError, EngineResult};
use crate::frame::{FrameSlot, PathFrame, StyledPath};
use crate::gate::{RequestGate, WorkerCommand};
use crate::lock_unpoisoned;
use crate::store::WaveStore;

/// State shared between the driver and the worker thread.
pub(crate) struct EngineShared {
    pub(crate) store: WaveStore,
    pub(crate) slot: FrameSlot,
    pub(crate) gate: RequestGate,
    pub(crate) mapper: RingMapper,
    clock: Box<dyn FrameClock>,
    origin: Mutex<Duration>,
    defect: Mutex<Option<EngineError>>,
}

impl EngineShared {
    pub(crate) fn new(clock: Box<dyn FrameClock>, mapper: RingMapper) -> Self {
        let origin = clock.now();
        Self {
            store: WaveStore::new(),
            slot: FrameSlot::new(),
            gate: RequestGate::new(),
            mapper,
            clock,
            origin: Mutex::new(origin),
            defect: Mutex::new(None),
        }
    }

    /// Restarts animation timing from the clock's current instant.
    pub(crate) fn restart_origin(&self) {
        self.set_origin(self.clock.now());
    }

    /// Sets an explicit origin on the clock's timeline.
    pub(crate) fn set_origin(&self, origin: Duration) {
        *lock_unpoisoned(&self.origin) = origin;
    }

    /// Seconds of animation time elapsed since the origin.
    pub(crate) fn elapsed_seconds(&self) -> f64 {
        let origin = *lock_unpoisoned(&self.origin);
        self.clock.now().saturating_sub(origin).as_secs_f64()
    }

    pub(crate) fn record_defect(&self, err: EngineError) {
        lock_unpoisoned(&self.defect).replace(err);
    }

    pub(crate) fn take_defect(&self) -> Option<EngineError> {
        lock_unpoisoned(&self.defect).take()
    }
}

/// The worker loop: wait for a request, recompute, publish, repeat.
///
/// A contract violation during computation is recorded as the last defect
/// and the frame is dropped; the loop itself always recovers to waiting.
pub(crate) fn run(shared: Arc<EngineShared>) {
    debug!("computation worker started");
    loop {
        match shared.gate.await_command() {
            WorkerCommand::Shutdown => break,
            WorkerCommand::Recompute => match compute_frame(&shared) {
                Ok(Some(frame)) => {
                    if shared.slot.publish(frame) {
                        debug!("replaced an unconsumed frame");
                    }
                }
                Ok(None) => debug!("skipped recompute: fewer than two waves"),
                Err(err) => {
                    warn!(code = err.code(), "dropped frame: {err}");
                    shared.record_defect(err);
                }
            },
        }
    }
    debug!("computation worker stopped");
}

/// Runs one computation pass against the current store state.
///
/// Returns `Ok(None)` when fewer than two waves are registered (a no-op, not
/// an error). All waves share one point count derived from the densest
/// cycle, so the base/sub sample-count precondition of
/// [`modulate`] holds by construction.
pub(crate) fn compute_frame(shared: &EngineShared) -> EngineResult<Option<PathFrame>> {
    let entries = shared.store.snapshot();
    if entries.len() < 2 {
        return Ok(None);
    }

    let elapsed = shared.elapsed_seconds();

    let max_cycle = entries.iter().map(|e| e.config.cycle).fold(0.0, f64::max);
    let max_sub_amplitude = entries[1..]
        .iter()
        .map(|e| e.config.amplitude)
        .fold(0.0, f64::max);
    let point_count = default_point_count(max_cycle);

    let base = entries[0].config;
    let base_samples = sample_sine(
        base.amplitude,
        base.cycle,
        -base.speed * elapsed,
        point_count,
    );

    let mut paths = Vec::with_capacity(entries.len() - 1);
    for (index, entry) in entries[1..].iter().enumerate() {
        let config = entry.config;
        let samples = sample_sine(
            config.amplitude,
            config.cycle,
            -config.speed * elapsed,
            point_count,
        );
        let modulated = modulate(&base_samples, &samples, config.amplitude, max_sub_amplitude)?;
        let ring = shared.mapper.map(&modulated);
        paths.push(StyledPath {
            path: build_spline(&ring),
            style: entry.style,
            index,
        });
    }

    Ok(Some(PathFrame::new(paths)))
}
