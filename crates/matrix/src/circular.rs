//! Circular convolution matrix, built directly in the frequency domain.
//!
//! Wrap-around cannot be expressed as a contiguous row range of the full
//! matrix, so this builder does not slice it.

use psfmat_spectral::CircularKernel;
use tracing::debug;

use crate::coefficient::Coefficient;
use crate::config::BuildConfig;
use crate::error::MatrixError;
use crate::matrix::{ConvMatrix, materialize};
use crate::mode::ConvMode;
use crate::psf::Psf;
use crate::slice::require_fit;

/// Builds the `n × n` circular convolution matrix.
///
/// The filter is placed in a length-`n` periodic buffer with tap offset `k`
/// at position `k mod n` (see [`periodic_buffer`]). Each column is the
/// circular convolution of that buffer with a basis vector, evaluated by
/// elementwise multiplication of DFTs. Real parts are taken after checking
/// the imaginary residual, and entries are settled onto `T`.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`MatrixError::InvalidConfig`] | `config` fails validation |
/// | [`MatrixError::ZeroLength`] | `n == 0` |
/// | [`MatrixError::SignalTooShort`] | `n < k`, where the tails would collide |
/// | [`MatrixError::EvenLengthFilter`] | even `k` without asymmetric centring |
/// | [`MatrixError::RoundingResidual`] | an integer entry lands further than [`Psf::residual_bound`] from an integer |
/// | [`MatrixError::EntryOutOfRange`] | an entry does not fit `T` |
/// | [`MatrixError::Spectral`] | imaginary residual above [`Psf::residual_bound`] |
#[tracing::instrument(skip(psf, config), fields(k = psf.len()))]
pub fn circular_matrix<T: Coefficient>(
    psf: &Psf<T>,
    n: usize,
    config: &BuildConfig,
) -> Result<ConvMatrix<T>, MatrixError> {
    config.validate()?;
    require_fit(ConvMode::Circular, n, psf.len())?;
    psf.require_centre(ConvMode::Circular, config)?;

    let kernel = CircularKernel::new(&periodic_buffer(psf, n))?;
    let tolerance = psf.residual_bound(config);

    let matrix = materialize(ConvMode::Circular, n, n, tolerance, |e| {
        kernel.convolve(e, tolerance).map_err(MatrixError::from)
    })?;

    debug!(rows = n, cols = n, tolerance, "circular matrix built");
    Ok(matrix)
}

/// Lays the filter out on a length-`n` ring centred at index 0.
///
/// Tap offset `k` (from [`Psf::centered_offsets`]) lands at `k mod n`, so
/// negative offsets occupy the end of the buffer.
pub fn periodic_buffer<T: Coefficient>(psf: &Psf<T>, n: usize) -> Vec<f64> {
    let mut buffer = vec![0.0; n];
    if n == 0 {
        return buffer;
    }
    for (offset, coeff) in psf.centered_offsets() {
        let pos = offset.rem_euclid(n as isize) as usize;
        buffer[pos] += coeff.to_f64();
    }
    buffer
}
