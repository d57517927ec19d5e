//! Build configuration shared by every matrix builder.

use psfmat_spectral::DEFAULT_TOLERANCE;

use crate::error::MatrixError;

/// Numerical and centring policy for the matrix builders.
///
/// # Example
///
/// ```ignore
/// use psfmat_matrix::BuildConfig;
///
/// let config = BuildConfig::new()
///     .with_tolerance(1e-9)
///     .with_parallel(true);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BuildConfig {
    /// Largest accepted imaginary part and integer rounding residual, per
    /// unit of filter L1 norm (see [`Psf::residual_bound`](crate::Psf::residual_bound)).
    tolerance: f64,
    /// Whether even-length filters may be centred at `floor((k - 1) / 2)`.
    asymmetric_centering: bool,
    /// Whether the aggregate builder runs its independent builders concurrently.
    parallel: bool,
}

impl BuildConfig {
    /// Creates a configuration with default parameters.
    ///
    /// Defaults: `tolerance = 1e-6`, `asymmetric_centering = false`,
    /// `parallel = false`.
    pub fn new() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            asymmetric_centering: false,
            parallel: false,
        }
    }

    /// Sets the residual tolerance, relative to `max(1, sum |h_i|)`.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets whether even-length filters are accepted by the centred modes.
    pub fn with_asymmetric_centering(mut self, allow: bool) -> Self {
        self.asymmetric_centering = allow;
        self
    }

    /// Sets whether the aggregate builder may use several threads.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Returns the residual tolerance.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns whether even-length filters are accepted by the centred modes.
    pub fn asymmetric_centering(&self) -> bool {
        self.asymmetric_centering
    }

    /// Returns whether the aggregate builder may use several threads.
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Checks the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidConfig`] if the tolerance is negative,
    /// NaN, infinite, or not below 0.5 (which would let rounding pick
    /// either neighbour).
    pub fn validate(&self) -> Result<(), MatrixError> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(MatrixError::InvalidConfig(
                "tolerance must be finite and >= 0".to_string(),
            ));
        }
        if self.tolerance >= 0.5 {
            return Err(MatrixError::InvalidConfig(
                "tolerance must be < 0.5".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self::new()
    }
}
