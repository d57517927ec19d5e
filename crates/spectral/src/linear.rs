//! Full linear convolution via zero-padded FFTs.

use std::fmt;
use std::sync::Arc;

use num_complex::Complex;
use rustfft::{Fft, FftPlanner};
use tracing::trace;

use crate::error::SpectralError;
use crate::residual::{real_part, to_complex_padded, validate_input};

/// A kernel pre-transformed for repeated linear convolution with signals of
/// one fixed length.
///
/// Planning the FFTs and transforming the kernel happen once in
/// [`LinearKernel::new`]; each [`LinearKernel::convolve`] then costs one
/// forward and one inverse transform.
pub struct LinearKernel {
    spectrum: Vec<Complex<f64>>,
    forward: Arc<dyn Fft<f64>>,
    inverse: Arc<dyn Fft<f64>>,
    signal_len: usize,
    output_len: usize,
}

impl LinearKernel {
    /// Prepares `kernel` for convolution with signals of length `signal_len`.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`SpectralError::EmptyInput`] | `kernel` is empty or `signal_len == 0` |
    /// | [`SpectralError::NonFiniteData`] | `kernel` contains NaN or infinity |
    pub fn new(kernel: &[f64], signal_len: usize) -> Result<Self, SpectralError> {
        validate_input("kernel", kernel)?;
        if signal_len == 0 {
            return Err(SpectralError::EmptyInput { what: "signal" });
        }

        let output_len = signal_len + kernel.len() - 1;
        let npad = output_len.next_power_of_two();

        let mut planner = FftPlanner::new();
        let forward = planner.plan_fft_forward(npad);
        let inverse = planner.plan_fft_inverse(npad);

        let mut spectrum = to_complex_padded(kernel, npad);
        forward.process(&mut spectrum);
        trace!(signal_len, output_len, fft_len = npad, "linear kernel planned");

        Ok(Self {
            spectrum,
            forward,
            inverse,
            signal_len,
            output_len,
        })
    }

    /// Returns the signal length this kernel was prepared for.
    pub fn signal_len(&self) -> usize {
        self.signal_len
    }

    /// Returns the output length `signal_len + kernel_len - 1`.
    pub fn output_len(&self) -> usize {
        self.output_len
    }

    /// Convolves `signal` with the kernel, returning `output_len()` samples.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`SpectralError::LengthMismatch`] | `signal.len() != signal_len()` |
    /// | [`SpectralError::NonFiniteData`] | `signal` contains NaN or infinity |
    /// | [`SpectralError::ImaginaryResidual`] | inverse transform is not real within `tolerance` |
    pub fn convolve(&self, signal: &[f64], tolerance: f64) -> Result<Vec<f64>, SpectralError> {
        if signal.len() != self.signal_len {
            return Err(SpectralError::LengthMismatch {
                expected: self.signal_len,
                got: signal.len(),
            });
        }
        validate_input("signal", signal)?;

        let npad = self.spectrum.len();
        let mut buffer = to_complex_padded(signal, npad);
        self.forward.process(&mut buffer);

        for (b, &k) in buffer.iter_mut().zip(self.spectrum.iter()) {
            *b = *b * k;
        }
        self.inverse.process(&mut buffer);

        // rustfft is unnormalized
        let norm = 1.0 / npad as f64;
        let scaled: Vec<Complex<f64>> = buffer[..self.output_len]
            .iter()
            .map(|&c| c * norm)
            .collect();

        real_part(&scaled, tolerance)
    }
}

impl fmt::Debug for LinearKernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinearKernel")
            .field("signal_len", &self.signal_len)
            .field("output_len", &self.output_len)
            .field("fft_len", &self.spectrum.len())
            .finish_non_exhaustive()
    }
}

/// Computes the full linear convolution of `signal` and `kernel`.
///
/// The output has `signal.len() + kernel.len() - 1` samples, covering every
/// shift at which the two sequences overlap at all.
///
/// # Errors
///
/// See [`LinearKernel::new`] and [`LinearKernel::convolve`].
pub fn linear_convolve(
    signal: &[f64],
    kernel: &[f64],
    tolerance: f64,
) -> Result<Vec<f64>, SpectralError> {
    validate_input("signal", signal)?;
    LinearKernel::new(kernel, signal.len())?.convolve(signal, tolerance)
}
