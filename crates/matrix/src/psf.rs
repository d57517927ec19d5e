//! Validated filter (point-spread function) wrapper.

use crate::coefficient::Coefficient;
use crate::config::BuildConfig;
use crate::error::MatrixError;
use crate::mode::ConvMode;

/// A validated filter of `k >= 1` finite coefficients.
///
/// Coefficient `i` (0-based) sits at offset `i - hp` from the centre tap,
/// where `hp = floor((k - 1) / 2)` is the half-width. Odd lengths give a
/// symmetric range `-hp..=hp`; even lengths put the extra tap on the
/// positive side.
///
/// # Example
///
/// ```ignore
/// use psfmat_matrix::Psf;
///
/// let psf = Psf::new(vec![1, 2, 1])?;
/// assert_eq!(psf.half_width(), 1);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Psf<T> {
    coeffs: Vec<T>,
}

impl<T: Coefficient> Psf<T> {
    /// Creates a new `Psf` after validating the coefficients.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`MatrixError::EmptyFilter`] | `coeffs.is_empty()` |
    /// | [`MatrixError::NonFiniteCoefficient`] | any coefficient is NaN or infinite |
    pub fn new(coeffs: Vec<T>) -> Result<Self, MatrixError> {
        if coeffs.is_empty() {
            return Err(MatrixError::EmptyFilter);
        }
        if let Some(index) = coeffs.iter().position(|c| !c.to_f64().is_finite()) {
            return Err(MatrixError::NonFiniteCoefficient { index });
        }
        Ok(Self { coeffs })
    }

    /// Returns the coefficients.
    pub fn coefficients(&self) -> &[T] {
        &self.coeffs
    }

    /// Returns the filter length `k`.
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// Returns `true` if the filter is empty.
    ///
    /// Note: a valid `Psf` is never empty.
    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Returns `true` if the filter has a single centre tap.
    pub fn is_odd(&self) -> bool {
        self.coeffs.len() % 2 == 1
    }

    /// Returns the half-width `floor((k - 1) / 2)`.
    pub fn half_width(&self) -> usize {
        (self.coeffs.len() - 1) / 2
    }

    /// Returns the coefficients widened to `f64`.
    pub fn to_f64(&self) -> Vec<f64> {
        self.coeffs.iter().map(|c| c.to_f64()).collect()
    }

    /// Returns `sum |h_i|`, the largest magnitude any matrix entry can reach.
    pub fn l1_norm(&self) -> f64 {
        self.coeffs.iter().map(|c| c.to_f64().abs()).sum()
    }

    /// Returns the bound applied to discarded imaginary parts and integer
    /// rounding residuals: `tolerance * max(1, sum |h_i|)`.
    ///
    /// Frequency-domain round-off grows with the magnitude of the values
    /// being transformed, so the configured tolerance is read relative to
    /// the filter's L1 norm.
    pub fn residual_bound(&self, config: &BuildConfig) -> f64 {
        config.tolerance() * self.l1_norm().max(1.0)
    }

    /// Iterates `(offset, coefficient)` pairs with offsets relative to the centre tap.
    pub fn centered_offsets(&self) -> impl Iterator<Item = (isize, T)> + '_ {
        let hp = self.half_width() as isize;
        self.coeffs
            .iter()
            .enumerate()
            .map(move |(i, &c)| (i as isize - hp, c))
    }

    /// Checks that `mode` can centre this filter under `config`.
    pub(crate) fn require_centre(
        &self,
        mode: ConvMode,
        config: &BuildConfig,
    ) -> Result<(), MatrixError> {
        if mode.is_centered() && !self.is_odd() && !config.asymmetric_centering() {
            return Err(MatrixError::EvenLengthFilter {
                len: self.len(),
                mode,
            });
        }
        Ok(())
    }
}

impl<T: Coefficient> TryFrom<Vec<T>> for Psf<T> {
    type Error = MatrixError;

    fn try_from(coeffs: Vec<T>) -> Result<Self, Self::Error> {
        Self::new(coeffs)
    }
}

impl<T> AsRef<[T]> for Psf<T> {
    fn as_ref(&self) -> &[T] {
        &self.coeffs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid_filter() {
        let psf = Psf::new(vec![1, 2, 1]).unwrap();
        assert_eq!(psf.len(), 3);
        assert!(!psf.is_empty());
        assert!(psf.is_odd());
        assert_eq!(psf.half_width(), 1);
        assert_eq!(psf.coefficients(), &[1, 2, 1]);
        assert_eq!(psf.to_f64(), vec![1.0, 2.0, 1.0]);
    }

    #[test]
    fn new_empty_rejected() {
        let err = Psf::<i64>::new(vec![]).unwrap_err();
        assert_eq!(err, MatrixError::EmptyFilter);
    }

    #[test]
    fn new_nan_rejected() {
        let err = Psf::new(vec![1.0, f64::NAN]).unwrap_err();
        assert_eq!(err, MatrixError::NonFiniteCoefficient { index: 1 });
    }

    #[test]
    fn half_width_values() {
        assert_eq!(Psf::new(vec![7]).unwrap().half_width(), 0);
        assert_eq!(Psf::new(vec![1, 1]).unwrap().half_width(), 0);
        assert_eq!(Psf::new(vec![1, 1, 1, 1]).unwrap().half_width(), 1);
        assert_eq!(Psf::new(vec![1, 1, 1, 1, 1]).unwrap().half_width(), 2);
    }

    #[test]
    fn l1_norm_and_residual_bound() {
        let psf = Psf::new(vec![3, -4, 1]).unwrap();
        assert_eq!(psf.l1_norm(), 8.0);
        let config = BuildConfig::new().with_tolerance(1e-6);
        assert!((psf.residual_bound(&config) - 8e-6).abs() < 1e-18);
    }

    #[test]
    fn residual_bound_never_below_tolerance() {
        let psf = Psf::new(vec![0.25, 0.25]).unwrap();
        let config = BuildConfig::new().with_tolerance(1e-6);
        assert!((psf.residual_bound(&config) - 1e-6).abs() < 1e-18);
    }

    #[test]
    fn centered_offsets_odd() {
        let psf = Psf::new(vec![4, 5, 6]).unwrap();
        let offsets: Vec<_> = psf.centered_offsets().collect();
        assert_eq!(offsets, vec![(-1, 4), (0, 5), (1, 6)]);
    }

    #[test]
    fn centered_offsets_even_leans_positive() {
        let psf = Psf::new(vec![1, 2, 3, 4]).unwrap();
        let offsets: Vec<_> = psf.centered_offsets().map(|(k, _)| k).collect();
        assert_eq!(offsets, vec![-1, 0, 1, 2]);
    }

    #[test]
    fn require_centre_policy() {
        let even = Psf::new(vec![1, 1]).unwrap();
        let strict = BuildConfig::new();
        let relaxed = BuildConfig::new().with_asymmetric_centering(true);

        assert!(even.require_centre(ConvMode::Full, &strict).is_ok());
        assert!(even.require_centre(ConvMode::Valid, &strict).is_ok());
        assert_eq!(
            even.require_centre(ConvMode::Same, &strict).unwrap_err(),
            MatrixError::EvenLengthFilter {
                len: 2,
                mode: ConvMode::Same
            }
        );
        assert!(even.require_centre(ConvMode::Circular, &relaxed).is_ok());
    }

    #[test]
    fn try_from_vec() {
        let psf: Psf<i32> = vec![1, -1].try_into().unwrap();
        assert_eq!(psf.as_ref(), &[1, -1]);
    }

    #[test]
    fn psf_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<Psf<i64>>();
        assert_impl::<Psf<f64>>();
    }
}
