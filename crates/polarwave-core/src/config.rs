//! Wave configuration parameters.

use serde::{Deserialize, Serialize};

/// Maximum wave amplitude, relative to the viewport.
///
/// An amplitude of 0.5 spans half the viewport height, the most a wave can
/// use without leaving the ring band.
pub const MAX_AMPLITUDE: f64 = 0.5;

/// Describes one sine wave of a composite animation.
///
/// All values are viewport-relative: an animation configured once renders
/// identically at any viewport size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WaveConfig {
    /// Wave amplitude, 0.0 to 0.5 relative to the viewport.
    pub amplitude: f64,
    /// Number of full periods across the scene.
    pub cycle: f64,
    /// Domain-widths traversed per second; the sign sets the direction.
    pub speed: f64,
}

impl WaveConfig {
    /// Creates a new wave configuration.
    ///
    /// Amplitude is clamped into `[0.0, 0.5]` and cycle to be non-negative.
    pub fn new(amplitude: f64, cycle: f64, speed: f64) -> Self {
        Self {
            amplitude: amplitude.clamp(0.0, MAX_AMPLITUDE),
            cycle: cycle.max(0.0),
            speed,
        }
    }

    /// A stationary wave (speed 0).
    pub fn stationary(amplitude: f64, cycle: f64) -> Self {
        Self::new(amplitude, cycle, 0.0)
    }
}
