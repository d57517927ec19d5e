//! Circular (periodic) convolution via the DFT multiplication identity.

use std::fmt;
use std::sync::Arc;

use num_complex::Complex;
use rustfft::{Fft, FftPlanner};
use tracing::trace;

use crate::error::SpectralError;
use crate::residual::{real_part, to_complex_padded, validate_input};

/// A length-N periodic kernel buffer held in the frequency domain.
///
/// Circular convolution of two length-N sequences equals the inverse DFT of
/// the elementwise product of their DFTs, so no padding is involved: the
/// transform length is exactly N and contributions past either end wrap
/// around.
pub struct CircularKernel {
    spectrum: Vec<Complex<f64>>,
    forward: Arc<dyn Fft<f64>>,
    inverse: Arc<dyn Fft<f64>>,
}

impl CircularKernel {
    /// Transforms a periodic kernel buffer.
    ///
    /// Index `i` of `buffer` is the coefficient applied at lag `i mod N`;
    /// negative lags therefore live at the end of the buffer.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`SpectralError::EmptyInput`] | `buffer` is empty |
    /// | [`SpectralError::NonFiniteData`] | `buffer` contains NaN or infinity |
    pub fn new(buffer: &[f64]) -> Result<Self, SpectralError> {
        validate_input("kernel", buffer)?;
        let n = buffer.len();

        let mut planner = FftPlanner::new();
        let forward = planner.plan_fft_forward(n);
        let inverse = planner.plan_fft_inverse(n);

        let mut spectrum = to_complex_padded(buffer, n);
        forward.process(&mut spectrum);
        trace!(fft_len = n, "circular kernel planned");

        Ok(Self {
            spectrum,
            forward,
            inverse,
        })
    }

    /// Returns the period N.
    pub fn len(&self) -> usize {
        self.spectrum.len()
    }

    /// Returns `true` if the period is zero.
    ///
    /// Note: a constructed `CircularKernel` never has period zero.
    pub fn is_empty(&self) -> bool {
        self.spectrum.is_empty()
    }

    /// Returns the kernel's DFT.
    pub fn spectrum(&self) -> &[Complex<f64>] {
        &self.spectrum
    }

    /// Circularly convolves a length-N `signal` with the kernel.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`SpectralError::LengthMismatch`] | `signal.len() != len()` |
    /// | [`SpectralError::NonFiniteData`] | `signal` contains NaN or infinity |
    /// | [`SpectralError::ImaginaryResidual`] | inverse transform is not real within `tolerance` |
    pub fn convolve(&self, signal: &[f64], tolerance: f64) -> Result<Vec<f64>, SpectralError> {
        let n = self.len();
        if signal.len() != n {
            return Err(SpectralError::LengthMismatch {
                expected: n,
                got: signal.len(),
            });
        }
        validate_input("signal", signal)?;

        let mut buffer = to_complex_padded(signal, n);
        self.forward.process(&mut buffer);
        for (b, &k) in buffer.iter_mut().zip(self.spectrum.iter()) {
            *b = *b * k;
        }
        self.inverse.process(&mut buffer);

        let norm = 1.0 / n as f64;
        let scaled: Vec<Complex<f64>> = buffer.iter().map(|&c| c * norm).collect();
        real_part(&scaled, tolerance)
    }
}

impl fmt::Debug for CircularKernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CircularKernel")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

/// Circularly convolves `signal` with `kernel_buffer` (both length N).
///
/// # Errors
///
/// See [`CircularKernel::new`] and [`CircularKernel::convolve`].
pub fn circular_convolve(
    signal: &[f64],
    kernel_buffer: &[f64],
    tolerance: f64,
) -> Result<Vec<f64>, SpectralError> {
    CircularKernel::new(kernel_buffer)?.convolve(signal, tolerance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn direct(signal: &[f64], buffer: &[f64]) -> Vec<f64> {
        let n = signal.len();
        (0..n)
            .map(|i| {
                (0..n)
                    .map(|j| signal[j] * buffer[(i + n - j) % n])
                    .sum::<f64>()
            })
            .collect()
    }

    #[test]
    fn impulse_returns_buffer() {
        let buffer = [2.0, 1.0, 0.0, 0.0, 1.0];
        let y = circular_convolve(&[1.0, 0.0, 0.0, 0.0, 0.0], &buffer, 1e-9).unwrap();
        for (got, want) in y.iter().zip(buffer.iter()) {
            assert_abs_diff_eq!(*got, *want, epsilon = 1e-9);
        }
    }

    #[test]
    fn shifted_impulse_wraps() {
        let buffer = [2.0, 1.0, 0.0, 0.0, 1.0];
        // impulse at the last position pushes lag +1 back to index 0
        let y = circular_convolve(&[0.0, 0.0, 0.0, 0.0, 1.0], &buffer, 1e-9).unwrap();
        let expected = [1.0, 0.0, 0.0, 1.0, 2.0];
        for (got, want) in y.iter().zip(expected.iter()) {
            assert_abs_diff_eq!(*got, *want, epsilon = 1e-9);
        }
    }

    #[test]
    fn matches_direct_sum_non_power_of_two() {
        let signal: Vec<f64> = (0..7).map(|i| (i as f64 * 1.3).cos()).collect();
        let buffer = [0.5, -1.0, 0.0, 0.25, 0.0, 3.0, 1.0];
        let y = circular_convolve(&signal, &buffer, 1e-9).unwrap();
        let want = direct(&signal, &buffer);
        for (got, want) in y.iter().zip(want.iter()) {
            assert_abs_diff_eq!(*got, *want, epsilon = 1e-9);
        }
    }

    #[test]
    fn period_one() {
        let y = circular_convolve(&[4.0], &[2.5], 1e-9).unwrap();
        assert_abs_diff_eq!(y[0], 10.0, epsilon = 1e-9);
    }

    #[test]
    fn length_mismatch_rejected() {
        let kernel = CircularKernel::new(&[1.0, 0.0, 0.0]).unwrap();
        assert_eq!(kernel.len(), 3);
        assert!(!kernel.is_empty());
        let err = kernel.convolve(&[1.0, 2.0], 1e-9).unwrap_err();
        assert_eq!(
            err,
            SpectralError::LengthMismatch {
                expected: 3,
                got: 2
            }
        );
    }

    #[test]
    fn spectrum_of_impulse_is_flat() {
        let kernel = CircularKernel::new(&[1.0, 0.0, 0.0, 0.0]).unwrap();
        for c in kernel.spectrum() {
            assert_abs_diff_eq!(c.re, 1.0, epsilon = 1e-12);
            assert_abs_diff_eq!(c.im, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn kernel_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CircularKernel>();
    }
}
