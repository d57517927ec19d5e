//! Full convolution matrix, the source every sliced mode derives from.

use psfmat_spectral::LinearKernel;
use tracing::debug;

use crate::coefficient::Coefficient;
use crate::config::BuildConfig;
use crate::error::MatrixError;
use crate::matrix::{ConvMatrix, materialize};
use crate::mode::ConvMode;
use crate::psf::Psf;

/// Builds the `(n + k - 1) × n` full convolution matrix.
///
/// Column `j` is the convolution of the filter with the basis vector `e_j`,
/// i.e. the filter placed starting at row `j`. The operator is evaluated in
/// the frequency domain and every entry is settled onto `T` (rounded for
/// integer filters).
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`MatrixError::InvalidConfig`] | `config` fails validation |
/// | [`MatrixError::ZeroLength`] | `n == 0` |
/// | [`MatrixError::RoundingResidual`] | an integer entry lands further than [`Psf::residual_bound`] from an integer |
/// | [`MatrixError::EntryOutOfRange`] | an entry does not fit `T` |
/// | [`MatrixError::Spectral`] | frequency-domain evaluation fails |
#[tracing::instrument(skip(psf, config), fields(k = psf.len()))]
pub fn full_matrix<T: Coefficient>(
    psf: &Psf<T>,
    n: usize,
    config: &BuildConfig,
) -> Result<ConvMatrix<T>, MatrixError> {
    config.validate()?;
    if n == 0 {
        return Err(MatrixError::ZeroLength);
    }

    let kernel = LinearKernel::new(&psf.to_f64(), n)?;
    let rows = kernel.output_len();
    let tolerance = psf.residual_bound(config);

    let matrix = materialize(ConvMode::Full, n, rows, tolerance, |e| {
        kernel.convolve(e, tolerance).map_err(MatrixError::from)
    })?;

    debug!(rows, cols = n, tolerance, "full matrix built");
    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn shape_is_n_plus_k_minus_one_by_n() {
        let psf = Psf::new(vec![1, 2, 1]).unwrap();
        let m = full_matrix(&psf, 5, &BuildConfig::new()).unwrap();
        assert_eq!(m.shape(), (7, 5));
        assert_eq!(m.mode(), ConvMode::Full);
    }

    #[test]
    fn columns_are_shifted_filters() {
        let psf = Psf::new(vec![3_i64, -1, 4]).unwrap();
        let m = full_matrix(&psf, 4, &BuildConfig::new()).unwrap();
        for col in 0..4 {
            for row in 0..6_usize {
                let want = row
                    .checked_sub(col)
                    .and_then(|i| psf.coefficients().get(i).copied())
                    .unwrap_or(0);
                assert_eq!(m.get(row, col), Some(want), "entry ({row}, {col})");
            }
        }
    }

    #[test]
    fn single_tap_is_scaled_identity() {
        let psf = Psf::new(vec![5]).unwrap();
        let m = full_matrix(&psf, 3, &BuildConfig::new()).unwrap();
        assert_eq!(
            m.to_rows(),
            vec![vec![5, 0, 0], vec![0, 5, 0], vec![0, 0, 5]]
        );
    }

    #[test]
    fn signal_shorter_than_filter() {
        let psf = Psf::new(vec![1, 2, 3, 4, 5]).unwrap();
        let m = full_matrix(&psf, 2, &BuildConfig::new()).unwrap();
        assert_eq!(m.shape(), (6, 2));
        assert_eq!(m.apply(&[1, 0]).unwrap(), vec![1, 2, 3, 4, 5, 0]);
    }

    #[test]
    fn float_filter_is_not_rounded() {
        let psf = Psf::new(vec![0.25, 0.5, 0.25]).unwrap();
        let m = full_matrix(&psf, 3, &BuildConfig::new()).unwrap();
        assert_abs_diff_eq!(m.get(0, 0).unwrap(), 0.25, epsilon = 1e-12);
        assert_abs_diff_eq!(m.get(1, 0).unwrap(), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(m.get(3, 1).unwrap(), 0.25, epsilon = 1e-12);
        assert_abs_diff_eq!(m.get(4, 0).unwrap(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn zero_length_rejected() {
        let psf = Psf::new(vec![1, 2, 1]).unwrap();
        let err = full_matrix(&psf, 0, &BuildConfig::new()).unwrap_err();
        assert_eq!(err, MatrixError::ZeroLength);
    }

    #[test]
    fn invalid_config_rejected() {
        let psf = Psf::new(vec![1]).unwrap();
        let config = BuildConfig::new().with_tolerance(-1.0);
        let err = full_matrix(&psf, 3, &config).unwrap_err();
        assert!(matches!(err, MatrixError::InvalidConfig(_)));
    }
}
