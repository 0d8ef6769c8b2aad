//! Error types for curve computation.

use thiserror::Error;

/// Result type for curve computation.
pub type CurveResult<T> = Result<T, CurveError>;

/// Errors that can occur while computing wave curves.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurveError {
    /// Base and sub-wave sample counts diverged.
    ///
    /// Both sequences are derived from one shared point count, so a mismatch
    /// means an invariant was broken upstream; it is never a recoverable
    /// input condition.
    #[error("base wave sample count {base} does not match sub wave sample count {wave}")]
    SampleCountMismatch {
        /// Sample count of the base wave.
        base: usize,
        /// Sample count of the offending sub-wave.
        wave: usize,
    },
}

impl CurveError {
    /// Returns the stable error code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            CurveError::SampleCountMismatch { .. } => "CURVE_001",
        }
    }
}
