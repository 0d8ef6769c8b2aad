//! Polarwave Engine
//!
//! The animation runtime around [`polarwave_core`]: a thread-safe wave
//! registry, a background computation worker, a single-slot latest-wins frame
//! handoff, and the driver that ties them to a display refresh cycle.
//!
//! # Overview
//!
//! Two independently clocked contexts cooperate here. The embedder's refresh
//! cycle calls [`WaveEngine::tick`] once per display frame; the tick posts a
//! coalesced recompute request and draws whatever frame is current, never
//! blocking. A dedicated worker thread waits on the request gate, snapshots
//! the wave store, recomputes every sub-wave path, and publishes the result
//! into the frame slot, overwriting any frame the renderer has not taken yet.
//! The renderer is therefore never more than one frame stale and the worker
//! is never slowed by a slow consumer.
//!
//! # Example
//!
//! ```ignore
//! use polarwave_engine::{StyleHandle, WaveConfig, WaveEngine};
//!
//! let mut engine = WaveEngine::new();
//! engine.register(WaveConfig::stationary(0.5, 0.5), StyleHandle(0)); // base
//! engine.register(WaveConfig::new(0.5, 2.5, 0.2), StyleHandle(1));
//! engine.register(WaveConfig::new(0.3, 2.0, -0.3), StyleHandle(2));
//! engine.start();
//!
//! // once per display refresh:
//! engine.tick(&mut renderer)?;
//! ```
//!
//! # Crate Structure
//!
//! - [`store`] - Thread-safe ordered wave registry
//! - [`frame`] - Computed path frames and the single-slot handoff
//! - [`gate`] - Recompute request gate with coalescing
//! - [`engine`] - The animation driver and the `Renderer` contract
//! - [`clock`] - Monotonic frame clock abstraction

pub mod clock;
pub mod engine;
pub mod error;
pub mod frame;
pub mod gate;
pub mod store;
mod worker;

// Re-export main types at the crate root
pub use clock::{FrameClock, MonotonicClock};
pub use engine::{Renderer, WaveEngine};
pub use error::{EngineError, EngineResult};
pub use frame::{FrameSlot, PathFrame, StyledPath};
pub use gate::{RequestGate, WorkerCommand};
pub use store::{StyleHandle, WaveEntry, WaveStore};

// Re-export the computation types embedders configure the engine with
pub use polarwave_core::{RingMapper, WaveConfig};

pub(crate) fn lock_unpoisoned<T>(mutex: &std::sync::Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    // Every critical section in this crate leaves its data coherent, so a
    // poisoned lock still guards a usable value.
    mutex.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}
