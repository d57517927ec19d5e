//! Boundary conventions for a convolution matrix.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MatrixError;

/// How the output of a convolution is truncated or wrapped.
///
/// | Mode | Rows for signal length `n`, filter length `k` |
/// |------|-----------------------------------------------|
/// | [`ConvMode::Full`] | `n + k - 1` |
/// | [`ConvMode::Same`] | `n` |
/// | [`ConvMode::Valid`] | `n - k + 1` |
/// | [`ConvMode::Circular`] | `n` |
///
/// Every mode has `n` columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConvMode {
    /// Every shift with any overlap, including partial overlap at the edges.
    Full,
    /// The `n` central rows of [`ConvMode::Full`].
    Same,
    /// Only the shifts where the filter lies entirely inside the signal.
    Valid,
    /// Periodic boundary: contributions past either end wrap around.
    Circular,
}

impl ConvMode {
    /// All modes in [`MatrixSet`](crate::MatrixSet) order.
    pub const ALL: [ConvMode; 4] = [
        ConvMode::Full,
        ConvMode::Circular,
        ConvMode::Same,
        ConvMode::Valid,
    ];

    /// Returns the lowercase label of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Same => "same",
            Self::Valid => "valid",
            Self::Circular => "circular",
        }
    }

    /// Returns the number of matrix rows for signal length `n` and filter
    /// length `k`, or `None` when the mode has no rows to offer
    /// (`n == 0`, `k == 0`, or `n < k` for [`ConvMode::Valid`]).
    pub fn output_rows(&self, n: usize, k: usize) -> Option<usize> {
        if n == 0 || k == 0 {
            return None;
        }
        match self {
            Self::Full => Some(n + k - 1),
            Self::Same | Self::Circular => Some(n),
            Self::Valid => (n >= k).then(|| n - k + 1),
        }
    }

    /// Returns `true` if the mode aligns the filter on its centre tap.
    pub fn is_centered(&self) -> bool {
        matches!(self, Self::Same | Self::Circular)
    }
}

impl fmt::Display for ConvMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConvMode {
    type Err = MatrixError;

    /// Parses a case-insensitive mode label.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::UnknownMode`] for anything other than
    /// `full`, `same`, `valid` or `circular`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "full" => Ok(Self::Full),
            "same" => Ok(Self::Same),
            "valid" => Ok(Self::Valid),
            "circular" => Ok(Self::Circular),
            _ => Err(MatrixError::UnknownMode(s.to_string())),
        }
    }
}
