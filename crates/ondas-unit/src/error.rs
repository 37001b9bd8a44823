//! Error types for unit construction.

use thiserror::Error;

/// Errors returned when a unit rejects its runtime descriptor.
///
/// Construction is the only fallible operation on a unit; once built, all
/// render-path methods are infallible.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum UnitError {
    /// Sample rate was zero, negative, or not finite
    #[error("unsupported sample rate: {0} Hz")]
    InvalidSampleRate(f32),

    /// Channel geometry does not match what the unit can process
    #[error("unsupported channel geometry: {input} in / {output} out")]
    InvalidGeometry {
        /// Input channel count the host offered.
        input: usize,
        /// Output channel count the host offered.
        output: usize,
    },
}
