//! Error types for the psfmat-spectral crate.

/// Error type for all fallible operations in the psfmat-spectral crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SpectralError {
    /// Returned when a signal or kernel has no elements.
    #[error("{what} is empty")]
    EmptyInput {
        /// Which input was empty.
        what: &'static str,
    },

    /// Returned when a signal does not match the length of a circular kernel.
    #[error("length mismatch: expected {expected}, got {got}")]
    LengthMismatch {
        /// Length of the kernel buffer.
        expected: usize,
        /// Length of the supplied signal.
        got: usize,
    },

    /// Returned when an input contains NaN or infinity.
    #[error("{what} contains non-finite values")]
    NonFiniteData {
        /// Which input contained the value.
        what: &'static str,
    },

    /// Returned when an inverse transform leaves a non-negligible imaginary part.
    #[error("imaginary residual {value:e} at index {index} exceeds tolerance {tolerance:e}")]
    ImaginaryResidual {
        /// Position of the offending sample.
        index: usize,
        /// Imaginary component found there.
        value: f64,
        /// Tolerance in effect.
        tolerance: f64,
    },
}
