//! Same and valid matrices, taken as row ranges of the full matrix.
//!
//! Both are slices rather than independent constructions so that the rows
//! they share with the full matrix are identical entry for entry.

use tracing::debug;

use crate::coefficient::Coefficient;
use crate::config::BuildConfig;
use crate::error::MatrixError;
use crate::full::full_matrix;
use crate::matrix::ConvMatrix;
use crate::mode::ConvMode;
use crate::psf::Psf;

/// Builds the `n × n` same matrix: rows `hp .. hp + n` (0-based) of the
/// full matrix, with `hp = floor((k - 1) / 2)`.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`MatrixError::EvenLengthFilter`] | even `k` without asymmetric centring |
/// | [`MatrixError::SliceOutOfRange`] | `hp + n` exceeds the full matrix rows |
///
/// plus everything [`full_matrix`] returns.
#[tracing::instrument(skip(psf, config), fields(k = psf.len()))]
pub fn same_matrix<T: Coefficient>(
    psf: &Psf<T>,
    n: usize,
    config: &BuildConfig,
) -> Result<ConvMatrix<T>, MatrixError> {
    psf.require_centre(ConvMode::Same, config)?;
    let full = full_matrix(psf, n, config)?;
    same_from_full(&full, psf.half_width(), n)
}

/// Builds the `(n - k + 1) × n` valid matrix: rows `k - 1 .. n` (0-based)
/// of the full matrix, where the filter overlaps the signal completely.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`MatrixError::ZeroLength`] | `n == 0` |
/// | [`MatrixError::SignalTooShort`] | `n < k` |
///
/// plus everything [`full_matrix`] returns.
#[tracing::instrument(skip(psf, config), fields(k = psf.len()))]
pub fn valid_matrix<T: Coefficient>(
    psf: &Psf<T>,
    n: usize,
    config: &BuildConfig,
) -> Result<ConvMatrix<T>, MatrixError> {
    let k = psf.len();
    require_fit(ConvMode::Valid, n, k)?;
    let full = full_matrix(psf, n, config)?;
    valid_from_full(&full, k, n)
}

pub(crate) fn same_from_full<T: Coefficient>(
    full: &ConvMatrix<T>,
    half_width: usize,
    n: usize,
) -> Result<ConvMatrix<T>, MatrixError> {
    let same = full.slice_rows(ConvMode::Same, half_width, half_width + n)?;
    debug!(start = half_width, rows = n, "same matrix sliced");
    Ok(same)
}

pub(crate) fn valid_from_full<T: Coefficient>(
    full: &ConvMatrix<T>,
    k: usize,
    n: usize,
) -> Result<ConvMatrix<T>, MatrixError> {
    let valid = full.slice_rows(ConvMode::Valid, k - 1, n)?;
    debug!(start = k - 1, rows = valid.n_rows(), "valid matrix sliced");
    Ok(valid)
}

/// Rejects `n == 0` and `n < k`.
pub(crate) fn require_fit(mode: ConvMode, n: usize, k: usize) -> Result<(), MatrixError> {
    if n == 0 {
        return Err(MatrixError::ZeroLength);
    }
    if n < k {
        return Err(MatrixError::SignalTooShort { n, k, mode });
    }
    Ok(())
}
