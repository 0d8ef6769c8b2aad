//! Error types for the animation engine.

use polarwave_core::CurveError;
use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors surfaced by the animation engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A computed frame does not line up with the registered styles.
    ///
    /// Checked when the frame is consumed; the offending frame is dropped
    /// rather than partially rendered.
    #[error("computed frame holds {paths} paths but {styles} styles are registered")]
    StyleCountMismatch {
        /// Paths carried by the offending frame.
        paths: usize,
        /// Style handles registered at consumption time.
        styles: usize,
    },

    /// Curve computation broke an invariant.
    #[error(transparent)]
    Curve(#[from] CurveError),
}

impl EngineError {
    /// Returns the stable error code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::StyleCountMismatch { .. } => "ENGINE_001",
            EngineError::Curve(err) => err.code(),
        }
    }
}
