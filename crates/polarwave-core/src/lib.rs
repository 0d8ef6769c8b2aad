//! Polarwave Core
//!
//! Pure computation for composite polar sine waves: evenly spaced sine
//! sampling, base-envelope modulation, polar ring mapping, and smooth spline
//! path construction.
//!
//! # Overview
//!
//! A composite wave is built from one *base* wave and any number of *sub*
//! waves. The base wave contributes no visible stroke; its samples act as an
//! amplitude envelope multiplied into every sub-wave. The modulated samples
//! are wrapped onto a closed ring (a wave-perturbed arc plus a plain return
//! arc) and smoothed into a cubic spline path that can be stroked as a single
//! continuous contour.
//!
//! # Determinism
//!
//! Every function in this crate is a pure function of its arguments: the same
//! configuration and elapsed time always produce the same curve. There is no
//! I/O, no randomness, and no shared state.
//!
//! # Crate Structure
//!
//! - [`config`] - Wave configuration parameters
//! - [`sampler`] - Evenly spaced sine wave sampling
//! - [`modulator`] - Base-envelope modulation of sub-wave samples
//! - [`ring`] - Polar ring mapping of modulated samples
//! - [`spline`] - Smooth spline paths through ordered point sequences
//! - [`geometry`] - Cartesian and polar point primitives

pub mod config;
pub mod error;
pub mod geometry;
pub mod modulator;
pub mod ring;
pub mod sampler;
pub mod spline;

// Re-export main types at the crate root
pub use config::{WaveConfig, MAX_AMPLITUDE};
pub use error::{CurveError, CurveResult};
pub use geometry::{Point, PolarPoint};
pub use modulator::modulate;
pub use ring::RingMapper;
pub use sampler::{default_point_count, sample_sine, Sample, POINTS_PER_CYCLE};
pub use spline::{build_spline, cubic_bezier, PathCommand, SplinePath};
