//! Conversion of inverse-transform output back to real samples.

use num_complex::Complex;

use crate::error::SpectralError;

/// Takes the real parts of `values`, rejecting non-negligible imaginary parts.
///
/// A real-valued convolution evaluated in the frequency domain only picks up
/// imaginary components through rounding, so anything above `tolerance` means
/// the inputs were not what the caller believed. `tolerance` is absolute;
/// round-off scales with the magnitude of the data, so callers working with
/// large values should scale it accordingly.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`SpectralError::ImaginaryResidual`] | `|im| > tolerance` for some sample |
pub fn real_part(values: &[Complex<f64>], tolerance: f64) -> Result<Vec<f64>, SpectralError> {
    values
        .iter()
        .enumerate()
        .map(|(index, c)| {
            if c.im.abs() > tolerance {
                Err(SpectralError::ImaginaryResidual {
                    index,
                    value: c.im,
                    tolerance,
                })
            } else {
                Ok(c.re)
            }
        })
        .collect()
}

/// Rejects empty or non-finite inputs.
pub(crate) fn validate_input(what: &'static str, data: &[f64]) -> Result<(), SpectralError> {
    if data.is_empty() {
        return Err(SpectralError::EmptyInput { what });
    }
    if !data.iter().all(|v| v.is_finite()) {
        return Err(SpectralError::NonFiniteData { what });
    }
    Ok(())
}

/// Copies `data` into a complex buffer of length `len`, zero-filling the tail.
pub(crate) fn to_complex_padded(data: &[f64], len: usize) -> Vec<Complex<f64>> {
    data.iter()
        .map(|&x| Complex::new(x, 0.0))
        .chain(std::iter::repeat_n(
            Complex::new(0.0, 0.0),
            len.saturating_sub(data.len()),
        ))
        .collect()
}
