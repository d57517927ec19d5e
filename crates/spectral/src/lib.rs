//! # psfmat-spectral
//!
//! Frequency-domain evaluation of one-dimensional convolution.
//!
//! Both operators zero-pad or wrap their inputs, multiply spectra
//! elementwise and inverse-transform. Results come back as real `f64`
//! vectors after the discarded imaginary parts have been checked against a
//! tolerance.
//!
//! ```mermaid
//! graph LR
//!     A["signal"] -->|"linear_convolve(&x, &h, tol)?"| B["len N+K-1"]
//!     C["kernel buffer"] -->|"CircularKernel::new(&buf)?"| D["CircularKernel"]
//!     A -->|"kernel.convolve(&x, tol)?"| E["len N"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use psfmat_spectral::{linear_convolve, DEFAULT_TOLERANCE};
//!
//! let y = linear_convolve(&[1.0, 2.0, 3.0], &[1.0, 1.0], DEFAULT_TOLERANCE)?;
//! assert_eq!(y.len(), 4);
//! ```

mod circular;
mod error;
mod linear;
mod residual;

pub use circular::{CircularKernel, circular_convolve};
pub use error::SpectralError;
pub use linear::{LinearKernel, linear_convolve};
pub use residual::real_part;

/// Default bound on imaginary parts and rounding residuals.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;
