//! Error types for the psfmat-matrix crate.

use psfmat_spectral::SpectralError;

use crate::mode::ConvMode;

/// Error type for all fallible operations in the psfmat-matrix crate.
///
/// Every variant is raised before any partially built matrix escapes; the
/// builders are pure, so retrying with the same inputs gives the same error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MatrixError {
    /// Returned when the filter has no coefficients.
    #[error("filter must have at least one coefficient")]
    EmptyFilter,

    /// Returned when a filter coefficient is NaN or infinite.
    #[error("filter coefficient {index} is not finite")]
    NonFiniteCoefficient {
        /// Position of the offending coefficient.
        index: usize,
    },

    /// Returned when a centred mode is requested for an even-length filter.
    #[error("{mode} matrix needs an odd-length filter to centre it, got length {len}")]
    EvenLengthFilter {
        /// Filter length.
        len: usize,
        /// Mode that needs a centre tap.
        mode: ConvMode,
    },

    /// Returned when the signal length is zero.
    #[error("signal length must be at least 1")]
    ZeroLength,

    /// Returned when the signal is shorter than the filter for a mode that needs `n >= k`.
    #[error("{mode} matrix needs signal length >= filter length, got n = {n}, k = {k}")]
    SignalTooShort {
        /// Signal length.
        n: usize,
        /// Filter length.
        k: usize,
        /// Mode that was requested.
        mode: ConvMode,
    },

    /// Returned when a mode label is not recognised.
    #[error("unknown convolution mode: {0}")]
    UnknownMode(String),

    /// Returned when a row slice falls outside the source matrix.
    #[error("row range {start}..{end} out of range for {rows} rows")]
    SliceOutOfRange {
        /// First row (inclusive).
        start: usize,
        /// Last row (exclusive).
        end: usize,
        /// Rows available.
        rows: usize,
    },

    /// Returned when a vector length does not match a matrix dimension.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Required length.
        expected: usize,
        /// Supplied length.
        got: usize,
    },

    /// Returned when a spectral result is too far from the coefficient grid.
    #[error("entry ({row}, {col}) = {value} is not within {tolerance:e} of a representable value")]
    RoundingResidual {
        /// Row of the entry.
        row: usize,
        /// Column of the entry.
        col: usize,
        /// Value before rounding.
        value: f64,
        /// Tolerance in effect.
        tolerance: f64,
    },

    /// Returned when a spectral result does not fit the coefficient type,
    /// e.g. an integer entry past `i32::MAX` or an `f32` entry that would
    /// narrow to infinity.
    #[error("entry ({row}, {col}) = {value} is out of range for the coefficient type")]
    EntryOutOfRange {
        /// Row of the entry.
        row: usize,
        /// Column of the entry.
        col: usize,
        /// Value that did not fit.
        value: f64,
    },

    /// Returned when an integer matrix-vector product overflows.
    #[error("integer overflow computing output row {row}")]
    Overflow {
        /// Output row being accumulated.
        row: usize,
    },

    /// Returned when a sliced matrix disagrees with its rows in the full matrix.
    #[error("{mode} matrix row {row} differs from the full matrix")]
    Inconsistent {
        /// Sliced mode that disagreed.
        mode: ConvMode,
        /// First row that disagreed.
        row: usize,
    },

    /// Returned when the build configuration is invalid.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Returned when frequency-domain evaluation fails.
    #[error(transparent)]
    Spectral(#[from] SpectralError),
}
