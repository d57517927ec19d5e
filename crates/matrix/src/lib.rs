//! # psfmat-matrix
//!
//! Explicit matrices for one-dimensional convolution with a fixed filter
//! (point-spread function), so that a convolution becomes an ordinary
//! matrix–vector product.
//!
//! ## Build Pipeline
//!
//! ```mermaid
//! graph LR
//!     A["Psf::new(coeffs)?"] --> B["Psf"]
//!     B -->|"full_matrix(&psf, n, &cfg)?"| C["full"]
//!     C -->|"rows hp..hp+n"| D["same"]
//!     C -->|"rows k-1..n"| E["valid"]
//!     B -->|"circular_matrix(&psf, n, &cfg)?"| F["circular"]
//!     C & D & E & F --> G["MatrixSet"]
//! ```
//!
//! ## Modes
//!
//! | Mode | Shape | Derivation |
//! |------|-------|------------|
//! | [`ConvMode::Full`] | `(n + k - 1, n)` | operator applied to each basis vector |
//! | [`ConvMode::Same`] | `(n, n)` | rows `hp .. hp + n` of full |
//! | [`ConvMode::Valid`] | `(n - k + 1, n)` | rows `k - 1 .. n` of full |
//! | [`ConvMode::Circular`] | `(n, n)` | periodic kernel, DFT multiplication |
//!
//! Integer filters (`i32`, `i64`) yield exact integer matrices: every value
//! coming out of the frequency domain is rounded after its residual has been
//! checked. Floating filters (`f32`, `f64`) are left unrounded. Residuals
//! are judged against the configured tolerance scaled by the filter's L1
//! norm, so large integer coefficients still settle exactly.
//!
//! ## Quick Start
//!
//! ```ignore
//! use psfmat_matrix::{BuildConfig, Psf, build_matrix_set};
//!
//! let psf = Psf::new(vec![1, 2, 1])?;
//! let set = build_matrix_set(&psf, 5, &BuildConfig::new())?;
//! assert_eq!(set.full().apply(&[1, 0, 0, 0, 0])?, vec![1, 2, 1, 0, 0, 0, 0]);
//! ```

mod circular;
mod coefficient;
mod config;
mod error;
mod full;
mod matrix;
mod mode;
mod psf;
mod set;
mod slice;

pub use circular::{circular_matrix, periodic_buffer};
pub use coefficient::{Coefficient, Unsettled};
pub use config::BuildConfig;
pub use error::MatrixError;
pub use full::full_matrix;
pub use matrix::ConvMatrix;
pub use mode::ConvMode;
pub use psf::Psf;
pub use set::{MatrixSet, build_matrix, build_matrix_set};
pub use slice::{same_matrix, valid_matrix};
