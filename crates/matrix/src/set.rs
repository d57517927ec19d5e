//! Aggregate builder and mode dispatch.

use serde::Serialize;
use tracing::debug;

use crate::circular::circular_matrix;
use crate::coefficient::Coefficient;
use crate::config::BuildConfig;
use crate::error::MatrixError;
use crate::full::full_matrix;
use crate::matrix::ConvMatrix;
use crate::mode::ConvMode;
use crate::psf::Psf;
use crate::slice::{require_fit, same_from_full, same_matrix, valid_from_full, valid_matrix};

/// The four convolution matrices of one filter and signal length.
///
/// Built in one call by [`build_matrix_set`], so all four agree on the
/// filter and `n`. Same and valid are row slices of the full matrix held
/// here.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MatrixSet<T: Coefficient> {
    #[serde(skip)]
    psf_len: usize,
    full: ConvMatrix<T>,
    circular: ConvMatrix<T>,
    same: ConvMatrix<T>,
    valid: ConvMatrix<T>,
}

impl<T: Coefficient> MatrixSet<T> {
    /// Returns the full matrix.
    pub fn full(&self) -> &ConvMatrix<T> {
        &self.full
    }

    /// Returns the circular matrix.
    pub fn circular(&self) -> &ConvMatrix<T> {
        &self.circular
    }

    /// Returns the same matrix.
    pub fn same(&self) -> &ConvMatrix<T> {
        &self.same
    }

    /// Returns the valid matrix.
    pub fn valid(&self) -> &ConvMatrix<T> {
        &self.valid
    }

    /// Returns the matrix for `mode`.
    pub fn get(&self, mode: ConvMode) -> &ConvMatrix<T> {
        match mode {
            ConvMode::Full => &self.full,
            ConvMode::Circular => &self.circular,
            ConvMode::Same => &self.same,
            ConvMode::Valid => &self.valid,
        }
    }

    /// Iterates the matrices in `(full, circular, same, valid)` order.
    pub fn iter(&self) -> impl Iterator<Item = &ConvMatrix<T>> {
        ConvMode::ALL.into_iter().map(|mode| self.get(mode))
    }

    /// Returns the signal length `n`.
    pub fn signal_len(&self) -> usize {
        self.full.n_cols()
    }

    /// Returns the filter length `k`.
    pub fn filter_len(&self) -> usize {
        self.psf_len
    }

    /// Consumes the set and returns `(full, circular, same, valid)`.
    pub fn into_parts(self) -> (ConvMatrix<T>, ConvMatrix<T>, ConvMatrix<T>, ConvMatrix<T>) {
        (self.full, self.circular, self.same, self.valid)
    }

    /// Verifies that same and valid equal their row ranges of full, exactly.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Inconsistent`] naming the first differing row.
    pub fn check_consistency(&self) -> Result<(), MatrixError> {
        let half_width = (self.psf_len - 1) / 2;
        let valid_start = self.psf_len - 1;
        for (sliced, start) in [(&self.same, half_width), (&self.valid, valid_start)] {
            for (row, values) in sliced.as_array().rows().into_iter().enumerate() {
                let matches = self
                    .full
                    .row(start + row)
                    .is_some_and(|full_row| full_row == values);
                if !matches {
                    return Err(MatrixError::Inconsistent {
                        mode: sliced.mode(),
                        row,
                    });
                }
            }
        }
        Ok(())
    }
}

/// Builds `(full, circular, same, valid)` for `psf` and signal length `n`.
///
/// Full is built once and sliced for same and valid. With
/// [`BuildConfig::parallel`] set, full and circular are built concurrently;
/// the result does not depend on the setting.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`MatrixError::ZeroLength`] | `n == 0` |
/// | [`MatrixError::SignalTooShort`] | `n < k` |
/// | [`MatrixError::EvenLengthFilter`] | even `k` without asymmetric centring |
///
/// plus everything the individual builders return.
#[tracing::instrument(skip(psf, config), fields(k = psf.len(), parallel = config.parallel()))]
pub fn build_matrix_set<T: Coefficient>(
    psf: &Psf<T>,
    n: usize,
    config: &BuildConfig,
) -> Result<MatrixSet<T>, MatrixError> {
    config.validate()?;
    let k = psf.len();
    require_fit(ConvMode::Valid, n, k)?;
    psf.require_centre(ConvMode::Same, config)?;

    let (full, circular) = if config.parallel() {
        rayon::join(
            || full_matrix(psf, n, config),
            || circular_matrix(psf, n, config),
        )
    } else {
        (full_matrix(psf, n, config), circular_matrix(psf, n, config))
    };
    let full = full?;
    let circular = circular?;

    let same = same_from_full(&full, psf.half_width(), n)?;
    let valid = valid_from_full(&full, k, n)?;

    debug!(n, k, "matrix set built");
    Ok(MatrixSet {
        psf_len: k,
        full,
        circular,
        same,
        valid,
    })
}

/// Builds the single matrix for `mode`.
///
/// # Errors
///
/// Whatever the builder for `mode` returns.
pub fn build_matrix<T: Coefficient>(
    mode: ConvMode,
    psf: &Psf<T>,
    n: usize,
    config: &BuildConfig,
) -> Result<ConvMatrix<T>, MatrixError> {
    match mode {
        ConvMode::Full => full_matrix(psf, n, config),
        ConvMode::Same => same_matrix(psf, n, config),
        ConvMode::Valid => valid_matrix(psf, n, config),
        ConvMode::Circular => circular_matrix(psf, n, config),
    }
}
